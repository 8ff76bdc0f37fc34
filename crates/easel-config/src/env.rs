use std::sync::OnceLock;

use regex::Regex;

/// Expand `{{ env.VAR }}` placeholders in raw config text
///
/// An optional fallback can be given as `{{ env.VAR | default("value") }}`;
/// it is substituted when the variable is unset. A missing variable without
/// a fallback is an error. TOML comment lines pass through untouched so a
/// commented-out secret does not have to exist.
pub fn expand_env(input: &str) -> Result<String, String> {
    let mut output = String::with_capacity(input.len());

    for (i, line) in input.lines().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        if line.trim_start().starts_with('#') {
            output.push_str(line);
        } else {
            output.push_str(&expand_line(line)?);
        }
    }

    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Group 1: dotted key (e.g. `env.HUGGINGFACE_API_KEY`)
    // Group 2: optional fallback inside default("...")
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*([a-zA-Z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("must be valid regex")
    })
}

fn expand_line(line: &str) -> Result<String, String> {
    let mut expanded = String::with_capacity(line.len());
    let mut last_end = 0;

    for captures in placeholder().captures_iter(line) {
        let overall = captures.get(0).expect("capture 0 always present");
        let key = &captures[1];
        let fallback = captures.get(2).map(|m| m.as_str());

        expanded.push_str(&line[last_end..overall.start()]);

        let var_name = key
            .strip_prefix("env.")
            .filter(|rest| !rest.contains('.'))
            .ok_or_else(|| format!("only variables scoped with 'env.' are supported: `{key}`"))?;

        match std::env::var(var_name) {
            Ok(value) => expanded.push_str(&value),
            Err(_) => match fallback {
                Some(value) => expanded.push_str(value),
                None => return Err(format!("environment variable not found: `{var_name}`")),
            },
        }

        last_end = overall.end();
    }

    expanded.push_str(&line[last_end..]);
    Ok(expanded)
}
