//! Homebrew formula generation.
//!
//! Renders the Ruby formula for a single macOS binary release.

use brewtap_release::error::Result;
use std::fmt::Write;

/// Base class every formula extends.
pub const FORMULA_BASE_CLASS: &str = "Formula";

/// Data for rendering a Homebrew formula.
///
/// Values are inserted verbatim; none of them may contain an unescaped `"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateData {
    /// Formula class name (e.g., "MyCoolTool")
    pub name: String,
    /// Description
    pub desc: String,
    /// Homepage URL
    pub homepage: String,
    /// Release repository in `owner/name` form
    pub repo: String,
    /// Release tag, also used as the formula version
    pub tag: String,
    /// Executable installed into `bin`
    pub binary_name: String,
    /// Post-install note; empty omits the `caveats` method
    pub caveats: String,
    /// Archive base filename
    pub file: String,
    /// Archive extension
    pub format: String,
    /// Lowercase hex SHA-256 of the archive
    pub sha256: String,
}

impl TemplateData {
    /// Download URL of the archive on GitHub Releases.
    #[must_use]
    pub fn download_url(&self) -> String {
        format!(
            "https://github.com/{}/releases/download/{}/{}.{}",
            self.repo, self.tag, self.file, self.format
        )
    }
}

/// Converts a binary name into a formula class name.
///
/// `-` and `_` separate words; each word gets an uppercase first letter and
/// the words are joined, so `my-cool_tool` becomes `MyCoolTool`.
#[must_use]
pub fn formula_name_for(binary_name: &str) -> String {
    binary_name
        .split(['-', '_', ' '])
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect()
}

/// Homebrew formula generator.
pub struct FormulaGenerator;

impl FormulaGenerator {
    /// Renders the Ruby formula for `data`.
    ///
    /// Output is deterministic: the same data always yields the same bytes.
    ///
    /// # Errors
    ///
    /// Returns [`brewtap_release::Error::Render`] if writing to the buffer fails.
    pub fn render(data: &TemplateData) -> Result<String> {
        let mut formula = String::new();

        writeln!(formula, "class {} < {FORMULA_BASE_CLASS}", data.name)?;
        writeln!(formula, "  desc \"{}\"", data.desc)?;
        writeln!(formula, "  homepage \"{}\"", data.homepage)?;
        writeln!(formula, "  url \"{}\"", data.download_url())?;
        writeln!(formula, "  version \"{}\"", data.tag)?;
        writeln!(formula, "  sha256 \"{}\"", data.sha256)?;

        formula.push_str("\n  def install\n");
        writeln!(formula, "    bin.install \"{}\"", data.binary_name)?;
        formula.push_str("  end\n");

        if !data.caveats.is_empty() {
            formula.push_str("\n  def caveats\n");
            writeln!(formula, "    \"{}\"", data.caveats)?;
            formula.push_str("  end\n");
        }

        formula.push_str("end\n");

        Ok(formula)
    }
}
