// SPDX-License-Identifier: MPL-2.0
//! Domain value types shared by the canvas core and the interface.

pub mod canvas;
