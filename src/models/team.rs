use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Team {
    #[serde(deserialize_with = "super::opaque_id")]
    pub id: String,
    #[serde(rename = "teamname")]
    pub name: String,
    pub members: Vec<String>,
}

/// Wire payload for team create/update requests.
#[derive(Debug, Serialize, Clone)]
pub struct TeamPayload {
    pub teamname: String,
    pub members: Vec<String>,
}

/// Split comma-separated member text into names: trim each element and drop
/// the empty ones. `"alice, bob ,  , carol"` becomes `["alice","bob","carol"]`.
pub fn parse_members(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|member| !member.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inverse of [`parse_members`] for pre-filling the edit form.
pub fn members_text(members: &[String]) -> String {
    members.join(", ")
}

/// Aggregate counts shown next to the team list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TeamStats {
    pub total: usize,
    pub single_member: usize,
    pub multi_member: usize,
}

impl TeamStats {
    pub fn of(teams: &[Team]) -> Self {
        Self {
            total: teams.len(),
            single_member: teams.iter().filter(|t| t.members.len() == 1).count(),
            multi_member: teams.iter().filter(|t| t.members.len() > 1).count(),
        }
    }
}
