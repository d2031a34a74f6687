use std::collections::{BTreeMap, HashMap};

/// Flow-control key merged ahead of service defaults; never sent on the wire.
pub const USE_PREMIER_SIGNING: &str = "use_premier_signing";

/// Final query parameters, sorted by key so the encoded query is stable.
pub type ParamSet = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedParams {
    pub use_premier_signing: bool,
    pub params: ParamSet,
}

/// Merge base defaults, per-service defaults and caller arguments, later sources winning.
///
/// The signing flag always comes from configuration; a `use_premier_signing` entry in
/// service defaults or caller arguments is dropped.
pub fn merge(
    premier_configured: bool,
    service_defaults: Option<&HashMap<String, String>>,
    caller_args: &HashMap<String, String>,
) -> MergedParams {
    let mut params = ParamSet::new();
    params.insert(
        USE_PREMIER_SIGNING.to_string(),
        premier_configured.to_string(),
    );

    for (key, value) in service_defaults.into_iter().flatten().chain(caller_args) {
        if key == USE_PREMIER_SIGNING {
            continue;
        }
        params.insert(key.clone(), value.clone());
    }

    let use_premier_signing = params
        .remove(USE_PREMIER_SIGNING)
        .map(|flag| flag == "true")
        .unwrap_or(false);

    MergedParams {
        use_premier_signing,
        params,
    }
}
