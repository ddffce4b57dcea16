use profilecard_core::{UserId, UserProfile};

fn status_label(status: bool) -> &'static str {
    if status {
        "Active Now"
    } else {
        "Offline"
    }
}

/// One list row, shaped for the card renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRowVm {
    pub id: UserId,
    pub name: String,
    pub drawable_id: String,
    pub status: bool,
    pub status_label: &'static str,
}

impl From<&UserProfile> for UserRowVm {
    fn from(p: &UserProfile) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            drawable_id: p.drawable_id.clone(),
            status: p.status,
            status_label: status_label(p.status),
        }
    }
}

/// The detail screen's view of a single profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetailsVm {
    pub name: String,
    pub drawable_id: String,
    pub status: bool,
    pub status_label: &'static str,
}

impl From<&UserProfile> for UserDetailsVm {
    fn from(p: &UserProfile) -> Self {
        Self {
            name: p.name.clone(),
            drawable_id: p.drawable_id.clone(),
            status: p.status,
            status_label: status_label(p.status),
        }
    }
}
