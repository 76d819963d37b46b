// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
pub mod polynomial;
pub mod prelude;
pub mod traits;
