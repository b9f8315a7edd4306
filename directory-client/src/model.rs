use serde::Deserialize;
use serde::Serialize;

/// One entry as served by the remote directory. Only the fields the console
/// needs are modelled; everything else in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<UpstreamCompany>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamCompany {
    #[serde(default)]
    pub name: Option<String>,
}

/// A directory entry reduced to the three fields the console keeps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUser {
    pub name: String,
    pub email: String,
    pub company: String,
}

impl From<UpstreamUser> for DirectoryUser {
    fn from(user: UpstreamUser) -> Self {
        let company = user
            .company
            .and_then(|company| company.name)
            .unwrap_or_default();
        Self {
            name: user.name,
            email: user.email,
            company,
        }
    }
}

/// Decode a directory body, preserving upstream order.
pub fn parse_directory_body(body: &[u8]) -> serde_json::Result<Vec<DirectoryUser>> {
    let upstream: Vec<UpstreamUser> = serde_json::from_slice(body)?;
    Ok(upstream.into_iter().map(DirectoryUser::from).collect())
}
