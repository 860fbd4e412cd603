//! `systemctl`: service resources.
//!
//! ```text
//! systemctl start influxdb
//! systemctl enable influxdb
//! ```

use super::is_name;
use crate::error::CommandError;
use crate::state::{Attr, StateMap, sid};

/// Interpret `start|stop|enable|disable <service>...`.
///
/// The first token selects the target module (`start` →
/// `service.running`, `stop` → `service.dead`, `enable` and `disable` →
/// `service.enabled`). Every following token that looks like a bare
/// service name produces one resource; no matching tokens yields an
/// empty fragment, not an error.
///
/// # Errors
///
/// [`CommandError::SystemctlUnknownAction`] when the first token is not
/// a recognized action.
pub(super) fn interpret(tokens: &[String], sls: &str) -> Result<StateMap, CommandError> {
    let Some((action, rest)) = tokens.split_first() else {
        return Err(CommandError::SystemctlUnknownAction);
    };
    let module = match action.as_str() {
        "start" => "service.running",
        "stop" => "service.dead",
        "enable" | "disable" => "service.enabled",
        _ => return Err(CommandError::SystemctlUnknownAction),
    };

    let mut resources = StateMap::new();
    for service in rest.iter().filter(|t| is_name(t)) {
        resources.insert_module(
            sid::generate(sls, "svc", service),
            module,
            vec![Attr::str("name", service)],
        );
    }
    Ok(resources)
}
