//! Non-interactive commands.
//!
//! Output goes to any [`Write`] so the commands can be checked without a
//! terminal.

use std::io::Write;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;

use crate::config::Config;
use crate::constants;
use crate::state::{outbound_links, PROJECTS};
use crate::theme::Role;

/// Print the project list in display order.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn projects(out: &mut impl Write, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, &PROJECTS)
            .wrap_err("Failed to serialize projects")?;
        writeln!(out)?;
        return Ok(());
    }

    for (i, project) in PROJECTS.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{} {}", project.icon.glyph(), project.title)?;
        writeln!(out, "   {}", project.description)?;
        writeln!(out, "   [{}]", project.tags.join(", "))?;
        writeln!(out, "   {}", project.link)?;
    }
    Ok(())
}

/// Print every outbound link verbatim, one per line.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn links(out: &mut impl Write) -> Result<()> {
    for url in outbound_links() {
        writeln!(out, "{url}")?;
    }
    Ok(())
}

/// Print where the config lives and the settings in effect.
///
/// # Errors
///
/// Returns an error if the settings cannot be serialized or written.
pub fn config(out: &mut impl Write, path: &Path, config: &Config) -> Result<()> {
    let missing = if path.exists() {
        ""
    } else {
        constants::CLI_MSG_CONFIG_MISSING
    };
    writeln!(
        out,
        "{}{}{missing}\n",
        constants::CLI_MSG_CONFIG_PATH,
        path.display()
    )?;
    let rendered = toml::to_string_pretty(config).wrap_err("Failed to render config")?;
    write!(out, "{rendered}")?;

    writeln!(out, "\n# palette (fixed)")?;
    for role in Role::ALL {
        writeln!(out, "# {:<9} = {}", role.name(), role.hex())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_projects_text_in_order() {
        let out = capture(|o| projects(o, false));
        let first = out.find("Hotel Management System").unwrap();
        let second = out.find("Employee Management System").unwrap();
        let third = out.find("Deep Learning based system").unwrap();
        assert!(first < second && second < third);
        assert!(out.contains("[React, Node.js, MongoDB, Tailwind]"));
        for project in &PROJECTS {
            assert!(out.contains(project.link));
        }
    }

    #[test]
    fn test_projects_json() {
        let out = capture(|o| projects(o, true));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let list = value.as_array().unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list[1]["title"], PROJECTS[1].title);
        assert_eq!(list[1]["tags"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_links_verbatim() {
        let out = capture(|o| links(o));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, outbound_links());
    }

    #[test]
    fn test_config_output_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let out = capture(|o| config(o, &path, &Config::default()));
        assert!(out.contains(constants::CLI_MSG_CONFIG_MISSING));

        let body = out.split_once("\n\n").unwrap().1;
        let parsed: Config = toml::from_str(body).unwrap();
        assert_eq!(parsed, Config::default());
        assert!(body.contains("# highlight = #E6B9DE"));
    }
}
