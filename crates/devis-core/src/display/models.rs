//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core
//! domain models, separated from the model definitions to maintain clean
//! separation of concerns.
//!
//! The Display implementations produce markdown suitable for reporting
//! collaborators and for tool-call handlers that read estimate state back
//! into a conversation.

use std::fmt;

use super::money::Money;
use crate::models::{Complexity, Estimate, EstimateSummary, Step};

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Step {
    /// Format the step with its sub-steps as a nested markdown list.
    fn fmt_step(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}", self.name)?;
        if self.is_leaf() {
            write!(f, " ({}h, {})", self.hours, self.complexity.label())?;
        }
        if self.disable_rate {
            write!(f, " [fixed]")?;
        }
        if self.is_additional {
            write!(f, " [option]")?;
        }
        writeln!(f)?;

        for sub in &self.sub_steps {
            writeln!(f, "  - {} ({}h, {})", sub.name, sub.hours, sub.complexity.label())?;
        }

        Ok(())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_step(f)
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Hourly rate: {}/h", Money(self.hourly_rate))?;
        writeln!(f, "- Hour max multiplier: {}", self.hour_max_multiplier)?;
        if let Some(link) = &self.sign_link {
            writeln!(f, "- Sign link: {link}")?;
        }

        // Description as a paragraph
        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if !self.features.is_empty() {
            writeln!(f, "\n## Features")?;
            writeln!(f)?;
            for feature in &self.features {
                writeln!(f, "- {}", feature.label)?;
            }
        }

        if self.steps.is_empty() {
            writeln!(f, "\nNo steps in this estimate.")?;
        } else {
            writeln!(f, "\n## Steps")?;
            writeln!(f)?;
            for step in &self.steps {
                write!(f, "{step}")?;
            }
        }

        if !self.schedule.is_empty() {
            writeln!(f, "\n## Schedule")?;
            writeln!(f)?;
            for variant in &self.schedule {
                writeln!(f, "- {} months ({} entries)", variant.duration, variant.repartition.len())?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for EstimateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;

        if let Some(desc) = &self.description {
            writeln!(f, "- **Description**: {desc}")?;
        }

        writeln!(
            f,
            "- **Steps**: {} main, {} optional",
            self.main_steps, self.option_steps
        )?;
        writeln!(
            f,
            "- **Hours**: {} - {}",
            self.totals.hours_min, self.totals.hours_max
        )?;
        writeln!(
            f,
            "- **Cost**: {} - {}",
            Money(self.totals.cost_min),
            Money(self.totals.cost_max)
        )?;
        if self.option_steps > 0 {
            writeln!(
                f,
                "- **Options**: {} - {}",
                Money(self.option_totals.cost_min),
                Money(self.option_totals.cost_max)
            )?;
        }
        writeln!(f)?;

        Ok(())
    }
}
