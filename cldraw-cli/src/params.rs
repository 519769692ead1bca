//! Query-style parameter overrides (`sr=2.6&tau=0.9&ai=true`).

use cldraw::CldConfig;

/// Applies every `key=value` pair of `query` to `cfg`.
///
/// Keys: `sr sm sc rho tau k ei di bl ai`. Empty values are ignored; unknown
/// keys, unparsable values and negative counts are errors.
pub fn apply_query(cfg: &mut CldConfig, query: &str) -> Result<(), String> {
    let query = query.trim().trim_start_matches('?');
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("expected key=value, got `{pair}`"))?;
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        match key.trim() {
            "sr" => cfg.sigma_r = parse_float(key, value)?,
            "sm" => cfg.sigma_m = parse_float(key, value)?,
            "sc" => cfg.sigma_c = parse_float(key, value)?,
            "rho" => cfg.rho = parse_float(key, value)?,
            "tau" => cfg.tau = parse_float(key, value)? as f32,
            "k" => cfg.etf_kernel = parse_count(key, value)?,
            "ei" => cfg.etf_iterations = parse_count(key, value)?,
            "di" => cfg.fdog_iterations = parse_count(key, value)?,
            "bl" => cfg.blur_size = parse_count(key, value)?,
            "ai" => cfg.anti_alias = parse_bool(key, value)?,
            other => return Err(format!("unknown parameter `{other}`")),
        }
    }
    Ok(())
}

fn parse_float(key: &str, value: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .map_err(|err| format!("parameter `{key}`: {err}"))
}

fn parse_count(key: &str, value: &str) -> Result<usize, String> {
    let n = value
        .parse::<i64>()
        .map_err(|err| format!("parameter `{key}`: {err}"))?;
    usize::try_from(n).map_err(|_| format!("parameter `{key}` must not be negative, got {n}"))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, String> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(format!("parameter `{key}`: invalid boolean `{value}`")),
    }
}
