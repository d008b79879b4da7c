//! In-process model of the page controls that drive each scene.

use std::collections::BTreeSet;

use crate::{
    chart::format::format_fixed,
    foundation::error::{ReelError, ReelResult},
};

/// Single-choice dropdown over a fixed option list.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Selector<T> {
    options: Vec<T>,
    selected: Option<usize>,
}

impl<T: PartialEq + std::fmt::Debug> Selector<T> {
    /// Dropdown selecting the first option (nothing when `options` is empty).
    pub fn new(options: Vec<T>) -> Self {
        let selected = if options.is_empty() { None } else { Some(0) };
        Self { options, selected }
    }

    /// Dropdown selecting `preferred` when offered, else the first option.
    pub fn with_preferred(options: Vec<T>, preferred: &T) -> Self {
        let mut s = Self::new(options);
        if let Some(i) = s.options.iter().position(|o| o == preferred) {
            s.selected = Some(i);
        }
        s
    }

    /// Offered options in display order.
    pub fn options(&self) -> &[T] {
        &self.options
    }

    /// Current choice.
    pub fn selected(&self) -> Option<&T> {
        self.selected.map(|i| &self.options[i])
    }

    /// Choose `value`; it must be one of the options.
    pub fn select(&mut self, value: &T) -> ReelResult<()> {
        let i = self
            .options
            .iter()
            .position(|o| o == value)
            .ok_or_else(|| ReelError::validation(format!("{value:?} is not an available option")))?;
        self.selected = Some(i);
        Ok(())
    }
}

/// One entry of the company multi-select.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CompanyOption {
    /// Company name.
    pub name: String,
    /// Checked state.
    pub selected: bool,
    /// Whether the live search currently shows this entry.
    pub visible: bool,
}

/// Searchable multi-select list of production companies.
///
/// Searching only hides entries; it never changes which ones are selected.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CompanyFilter {
    options: Vec<CompanyOption>,
    search: String,
}

impl CompanyFilter {
    /// Company checked when the list is first built.
    pub const DEFAULT_COMPANY: &'static str = "Lucasfilm";

    /// List over `companies`, with [`Self::DEFAULT_COMPANY`] pre-checked when present.
    pub fn new(companies: Vec<String>) -> Self {
        let options = companies
            .into_iter()
            .map(|name| CompanyOption {
                selected: name == Self::DEFAULT_COMPANY,
                visible: true,
                name,
            })
            .collect();
        Self {
            options,
            search: String::new(),
        }
    }

    /// All entries in display order.
    pub fn options(&self) -> &[CompanyOption] {
        &self.options
    }

    /// Current search text.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Update the live search; entries not containing `text`
    /// (case-insensitive) are hidden.
    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_string();
        let needle = text.to_lowercase();
        for opt in &mut self.options {
            opt.visible = opt.name.to_lowercase().contains(&needle);
        }
    }

    /// Names of the entries the search currently shows.
    pub fn visible(&self) -> impl Iterator<Item = &str> {
        self.options
            .iter()
            .filter(|o| o.visible)
            .map(|o| o.name.as_str())
    }

    /// Check `name`.
    pub fn select(&mut self, name: &str) -> ReelResult<()> {
        self.option_mut(name)?.selected = true;
        Ok(())
    }

    /// Uncheck `name`.
    pub fn deselect(&mut self, name: &str) -> ReelResult<()> {
        self.option_mut(name)?.selected = false;
        Ok(())
    }

    /// Flip `name`.
    pub fn toggle(&mut self, name: &str) -> ReelResult<()> {
        let opt = self.option_mut(name)?;
        opt.selected = !opt.selected;
        Ok(())
    }

    /// Uncheck every entry, visible or not.
    pub fn unselect_all(&mut self) {
        for opt in &mut self.options {
            opt.selected = false;
        }
    }

    /// Checked company names.
    pub fn selection(&self) -> BTreeSet<String> {
        self.options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.name.clone())
            .collect()
    }

    fn option_mut(&mut self, name: &str) -> ReelResult<&mut CompanyOption> {
        self.options
            .iter_mut()
            .find(|o| o.name == name)
            .ok_or_else(|| ReelError::validation(format!("unknown company '{name}'")))
    }
}

/// Pair of score range inputs with their live text labels.
///
/// Inputs clamp to `[LOWEST, HIGHEST]` like a range slider; the bounds are
/// independent, so `min > max` is allowed and simply matches nothing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScoreRange {
    min: f64,
    max: f64,
}

impl Default for ScoreRange {
    fn default() -> Self {
        Self {
            min: Self::LOWEST,
            max: Self::HIGHEST,
        }
    }
}

impl ScoreRange {
    /// Smallest settable score.
    pub const LOWEST: f64 = 0.0;
    /// Largest settable score.
    pub const HIGHEST: f64 = 10.0;

    /// Range with both inputs set (clamped).
    pub fn new(min: f64, max: f64) -> ReelResult<Self> {
        let mut r = Self::default();
        r.set_min(min)?;
        r.set_max(max)?;
        Ok(r)
    }

    /// Move the lower input.
    pub fn set_min(&mut self, v: f64) -> ReelResult<()> {
        self.min = Self::clamp_input(v)?;
        Ok(())
    }

    /// Move the upper input.
    pub fn set_max(&mut self, v: f64) -> ReelResult<()> {
        self.max = Self::clamp_input(v)?;
        Ok(())
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Labels shown beside the inputs, one decimal each.
    pub fn labels(&self) -> (String, String) {
        (format_fixed(self.min, 1), format_fixed(self.max, 1))
    }

    fn clamp_input(v: f64) -> ReelResult<f64> {
        if v.is_nan() {
            return Err(ReelError::validation("score bound must be a number"));
        }
        Ok(v.clamp(Self::LOWEST, Self::HIGHEST))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/controls.rs"]
mod tests;
