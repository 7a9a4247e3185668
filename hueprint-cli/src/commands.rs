//! Command handlers.
//!
//! Each handler returns the text to print so the binary stays a thin shell
//! around them and tests can call them directly.

use std::path::Path;

use hueprint::{
    allocate_hue, colors_for, extract_initials, generate_pattern, match_assignee, pattern_kind,
    render_kind, AvatarIdentity, Hue, RosterEntry,
};
use serde_json::json;
use tracing::{debug, info};

use crate::cli::Commands;
use crate::config::{HueprintConfig, OutputFormat};
use crate::error::{CliError, CliResult};

/// Run one subcommand and produce its output.
pub fn run(command: Commands, config: &HueprintConfig, format: OutputFormat) -> CliResult<String> {
    match command {
        Commands::Allocate { hues } => allocate(&hues, format),
        Commands::Colors { hue } => colors(hue, format),
        Commands::Initials { name, email } => initials(name.as_deref(), email.as_deref(), format),
        Commands::Pattern {
            seed,
            hue,
            size,
            preset,
            kind,
            out,
        } => {
            let size = config.resolve_size(size, preset.as_deref())?;
            let svg = match kind {
                Some(kind) => render_kind(kind, &seed, hue, size)?,
                None => generate_pattern(&seed, hue, size)?,
            };
            let kind = kind.unwrap_or_else(|| pattern_kind(&seed));
            debug!(%kind, size, "rendered pattern for {}", seed);

            if let Some(path) = out {
                std::fs::write(&path, &svg)?;
                info!("Wrote pattern to {}", path.display());
                return Ok(String::new());
            }
            Ok(match format {
                OutputFormat::Text => svg,
                OutputFormat::Json => json!({
                    "seed": seed,
                    "hue": hue,
                    "size": size,
                    "kind": kind,
                    "svg": svg,
                })
                .to_string(),
            })
        }
        Commands::Match { input, roster } => {
            let roster = load_roster(&roster)?;
            assignee(&input, &roster, format)
        }
        Commands::Identity {
            id,
            name,
            email,
            roster,
        } => {
            let existing: Vec<Hue> = match roster {
                Some(path) => load_roster(&path)?.iter().map(|entry| entry.hue).collect(),
                None => Vec::new(),
            };
            let identity =
                AvatarIdentity::for_new_user(&id, name.as_deref(), email.as_deref(), &existing);
            identity_output(&identity, format)
        }
    }
}

pub fn allocate(hues: &[Hue], format: OutputFormat) -> CliResult<String> {
    let hue = allocate_hue(hues);
    Ok(match format {
        OutputFormat::Text => hue.to_string(),
        OutputFormat::Json => json!({ "hue": hue }).to_string(),
    })
}

pub fn colors(hue: Hue, format: OutputFormat) -> CliResult<String> {
    let colors = colors_for(hue);
    Ok(match format {
        OutputFormat::Text => format!(
            "background: {}\nlight_background: {}\naccent_text: {}\ncontrast_text: {} ({})",
            colors.background,
            colors.light_background,
            colors.accent_text,
            colors.contrast_text,
            colors.contrast_text.css()
        ),
        OutputFormat::Json => serde_json::to_string(&colors)?,
    })
}

pub fn initials(
    name: Option<&str>,
    email: Option<&str>,
    format: OutputFormat,
) -> CliResult<String> {
    let initials = extract_initials(name, email);
    Ok(match format {
        OutputFormat::Text => initials,
        OutputFormat::Json => json!({ "initials": initials }).to_string(),
    })
}

pub fn assignee(input: &str, roster: &[RosterEntry], format: OutputFormat) -> CliResult<String> {
    let entry = match_assignee(input, roster).ok_or_else(|| CliError::NoMatch {
        input: input.to_string(),
    })?;
    Ok(match format {
        OutputFormat::Text => format!(
            "{} {} (hue {}, {})",
            entry.id,
            entry.name,
            entry.hue,
            hueprint::background(entry.hue)
        ),
        OutputFormat::Json => serde_json::to_string(entry)?,
    })
}

fn identity_output(identity: &AvatarIdentity, format: OutputFormat) -> CliResult<String> {
    Ok(match format {
        OutputFormat::Text => format!(
            "avatar_hue: {}\navatar_pattern: {}\ninitials: {}",
            identity.avatar_hue, identity.avatar_pattern, identity.initials
        ),
        OutputFormat::Json => serde_json::to_string(identity)?,
    })
}

/// Read a roster list from a `.json` file, or YAML for any other extension.
pub fn load_roster(path: &Path) -> CliResult<Vec<RosterEntry>> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::RosterRead {
        path: path.to_path_buf(),
        source,
    })?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let roster: Vec<RosterEntry> = if is_json {
        serde_json::from_str(&content)?
    } else {
        serde_yaml_ng::from_str(&content)?
    };
    debug!("Loaded {} roster entries from {}", roster.len(), path.display());
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_roster() -> Vec<RosterEntry> {
        vec![
            RosterEntry::new("u1", "John Smith", "JS", Hue::new(210)),
            RosterEntry::new("u2", "Jane Doe", "JD", Hue::new(30)),
        ]
    }

    #[test]
    fn test_allocate_text_and_json() {
        assert_eq!(allocate(&[], OutputFormat::Text).unwrap(), "210");
        assert_eq!(
            allocate(&[Hue::new(210)], OutputFormat::Json).unwrap(),
            r#"{"hue":30}"#
        );
    }

    #[test]
    fn test_colors_text() {
        let out = colors(Hue::new(210), OutputFormat::Text).unwrap();
        assert!(out.contains("background: hsl(210, 65%, 45%)"));
        assert!(out.contains("contrast_text: light (#ffffff)"));
    }

    #[test]
    fn test_initials_json() {
        let out = initials(Some("田中太郎"), None, OutputFormat::Json).unwrap();
        assert_eq!(out, r#"{"initials":"田中"}"#);
    }

    #[test]
    fn test_assignee_no_match() {
        let err = assignee("xy", &sample_roster(), OutputFormat::Text).unwrap_err();
        assert!(matches!(err, CliError::NoMatch { .. }));
    }

    #[test]
    fn test_assignee_text() {
        let out = assignee("john", &sample_roster(), OutputFormat::Text).unwrap();
        assert_eq!(out, "u1 John Smith (hue 210, hsl(210, 65%, 45%))");
    }

    #[test]
    fn test_load_roster_yaml_and_json() {
        let dir = TempDir::new().unwrap();
        let yaml = dir.path().join("roster.yaml");
        std::fs::write(
            &yaml,
            "- id: u1\n  name: John Smith\n  initials: JS\n  hue: 210\n- id: u2\n  name: Jane Doe\n  hue: 30\n",
        )
        .unwrap();
        let json = dir.path().join("roster.json");
        std::fs::write(&json, serde_json::to_string(&sample_roster()).unwrap()).unwrap();

        let from_yaml = load_roster(&yaml).unwrap();
        assert_eq!(from_yaml.len(), 2);
        assert_eq!(from_yaml[1].initials, "");
        assert_eq!(load_roster(&json).unwrap(), sample_roster());
    }

    #[test]
    fn test_load_roster_missing_file() {
        let err = load_roster(Path::new("/nonexistent/roster.yaml")).unwrap_err();
        assert!(matches!(err, CliError::RosterRead { .. }));
    }

    #[test]
    fn test_pattern_to_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("avatar.svg");
        let command = Commands::Pattern {
            seed: "user-1".into(),
            hue: Hue::new(30),
            size: None,
            preset: Some("xl".into()),
            kind: None,
            out: Some(out.clone()),
        };
        let printed = run(command, &HueprintConfig::default(), OutputFormat::Text).unwrap();
        assert!(printed.is_empty());
        let svg = std::fs::read_to_string(&out).unwrap();
        assert_eq!(svg, generate_pattern("user-1", Hue::new(30), 96).unwrap());
    }

    #[test]
    fn test_identity_against_roster() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roster.json");
        std::fs::write(&path, serde_json::to_string(&sample_roster()).unwrap()).unwrap();
        let command = Commands::Identity {
            id: "u3".into(),
            name: Some("Grace Hopper".into()),
            email: None,
            roster: Some(path),
        };
        let out = run(command, &HueprintConfig::default(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["avatar_hue"], 120);
        assert_eq!(value["avatar_pattern"], "u3");
        assert_eq!(value["initials"], "GH");
    }
}
