// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! JWT claims and the authenticated user they resolve to.

use serde::{Deserialize, Serialize};

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the canonical user id.
    pub sub: String,
    /// Expiration timestamp (validated by the jsonwebtoken crate).
    pub exp: i64,
    /// Issued-at timestamp.
    #[serde(default)]
    pub iat: i64,
}

/// The verified identity a request acts on behalf of.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: String,
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_comes_from_sub() {
        let claims = Claims {
            sub: "user_42".to_string(),
            exp: 9_999_999_999,
            iat: 1_700_000_000,
        };
        let user = AuthenticatedUser::from(claims);
        assert_eq!(user.user_id, "user_42");
    }
}
