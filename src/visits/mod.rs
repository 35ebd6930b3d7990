/*
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Visits on graphs.
//!
//! Visits report what they find to a callback that returns a
//! [`ControlFlow`](std::ops::ControlFlow): returning
//! [`Break`](std::ops::ControlFlow::Break) stops the visit immediately, and
//! the break value is returned to the caller. When the callback never breaks,
//! use [`Infallible`](std::convert::Infallible) as break type and extract the
//! result with
//! [`continue_value_no_break`](no_break::NoBreak::continue_value_no_break).

pub mod breadth_first;
