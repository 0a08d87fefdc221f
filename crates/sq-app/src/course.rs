//! Course description loaded by the demo

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sq_core::{AdjacentUnit, SequenceAttributes};
use sq_ui::PaneContent;

/// One unit holding a single sequence widget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitConfig {
    /// URI the unit is served at, e.g. `unit?unit=2`
    pub uri: String,
    pub title: String,
    /// Runtime usage id of the unit's sequence widget
    pub usage_id: String,
    pub attributes: SequenceAttributes,
    pub panes: Vec<PaneContent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseConfig {
    pub title: String,
    pub units: Vec<UnitConfig>,
}

impl CourseConfig {
    /// Read a course from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read course file {}", path.display()))?;
        let course: CourseConfig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse course file {}", path.display()))?;
        course.validate()?;
        Ok(course)
    }

    /// Every unit needs one pane per page and links that resolve
    pub fn validate(&self) -> Result<()> {
        for unit in &self.units {
            if unit.attributes.page_count != unit.panes.len() {
                anyhow::bail!(
                    "Unit {} declares {} pages but has {} panes",
                    unit.uri,
                    unit.attributes.page_count,
                    unit.panes.len()
                );
            }
            let units = unit.attributes.adjacent_units();
            for adjacent in [units.previous, units.next].into_iter().flatten() {
                if let AdjacentUnit::Unit(uri) = &adjacent {
                    if self.unit(uri).is_none() {
                        anyhow::bail!("Unit {} links to unknown unit {}", unit.uri, uri);
                    }
                }
            }
        }
        Ok(())
    }

    pub fn unit(&self, uri: &str) -> Option<&UnitConfig> {
        self.units.iter().find(|unit| unit.uri == uri)
    }

    /// Three linked units used when no course file is given
    pub fn builtin() -> Self {
        let specs: [(&str, &[&str]); 3] = [
            ("Getting started", &["Welcome", "How this course works"]),
            ("Core ideas", &["Ownership", "Borrowing", "Lifetimes", "Check your understanding"]),
            ("Wrapping up", &["Summary", "Final quiz", "Next steps"]),
        ];
        let count = specs.len();

        let units = specs
            .iter()
            .enumerate()
            .map(|(i, (title, pages))| {
                let uri = format!("unit?unit={}", i + 1);
                let previous = if i == 0 {
                    "course".to_string()
                } else {
                    format!("unit?unit={}", i)
                };
                let next = if i + 1 == count {
                    "course".to_string()
                } else {
                    format!("unit?unit={}", i + 2)
                };

                UnitConfig {
                    uri,
                    title: title.to_string(),
                    usage_id: format!("sequence-{}", i + 1),
                    attributes: SequenceAttributes::new(pages.len())
                        .with_previous_href(previous)
                        .with_next_href(next),
                    panes: pages
                        .iter()
                        .map(|page| PaneContent {
                            title: page.to_string(),
                            body: format!("{} of \"{}\".", page, title),
                        })
                        .collect(),
                }
            })
            .collect();

        Self {
            title: "Demo course".to_string(),
            units,
        }
    }
}
