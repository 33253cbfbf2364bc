use crate::{Player, Role};
use serde::Serialize;

/// One player paired with the role they were dealt. Borrows both from the
/// caller's inputs; only the generator creates these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoleAssignment<'a> {
    player: &'a Player,
    role: &'a Role,
}

impl<'a> RoleAssignment<'a> {
    pub(crate) fn new(player: &'a Player, role: &'a Role) -> Self {
        Self { player, role }
    }

    pub fn player(&self) -> &'a Player {
        self.player
    }

    pub fn role(&self) -> &'a Role {
        self.role
    }
}
