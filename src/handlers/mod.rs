pub mod crud;
pub mod users;

use serde::{de::DeserializeOwned, Serialize};

use crate::db::repository::Table;
use crate::models::{activity::Activity, goal::Goal, measurement::Measurement, user::User};

/// A table exposed over HTTP. `LABEL` names it in 404 messages and
/// `ID_PARAM` names its path parameter in 400 messages.
pub trait Resource: Table + Serialize + DeserializeOwned {
    const LABEL: &'static str;
    const ID_PARAM: &'static str;
}

impl Resource for User {
    const LABEL: &'static str = "User";
    const ID_PARAM: &'static str = "user-id";
}

impl Resource for Activity {
    const LABEL: &'static str = "Activity";
    const ID_PARAM: &'static str = "activity-id";
}

impl Resource for Goal {
    const LABEL: &'static str = "Goal";
    const ID_PARAM: &'static str = "goal-id";
}

impl Resource for Measurement {
    const LABEL: &'static str = "Measurement";
    const ID_PARAM: &'static str = "measurement-id";
}
