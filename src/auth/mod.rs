// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication: bearer JWT validation.
//!
//! The service does not issue tokens; it validates HS256 access tokens
//! minted by the account service against a shared `JWT_SECRET` and hands
//! the verified user id to handlers via the [`Auth`] extractor.

mod claims;
mod error;
mod extractor;

pub use claims::{AuthenticatedUser, Claims};
pub use error::AuthError;
pub use extractor::Auth;
