use serde::{Deserialize, Serialize};

use crate::config::ClassNames;
use crate::validation::PasswordRules;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChecklistItem {
    Length,
    Uppercase,
    Symbol,
    Match,
}

impl ChecklistItem {
    pub const ALL: [ChecklistItem; 4] = [Self::Length, Self::Uppercase, Self::Symbol, Self::Match];

    /// Id of the indicator element on the page.
    pub fn element_id(&self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Uppercase => "uppercase",
            Self::Symbol => "symbol",
            Self::Match => "match",
        }
    }

    pub fn label(&self, min_length: usize) -> String {
        match self {
            Self::Length => format!("At least {min_length} characters"),
            Self::Uppercase => "An uppercase letter".to_string(),
            Self::Symbol => "A symbol".to_string(),
            Self::Match => "Passwords match".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayState {
    Valid,
    Invalid,
    #[default]
    Neutral,
}

impl DisplayState {
    fn from_rule(passed: bool) -> Self {
        if passed {
            Self::Valid
        } else {
            Self::Invalid
        }
    }

    /// The single class this state puts on an indicator. Neutral carries none.
    pub fn class_name<'a>(&self, classes: &'a ClassNames) -> Option<&'a str> {
        match self {
            Self::Valid => Some(&classes.valid),
            Self::Invalid => Some(&classes.invalid),
            Self::Neutral => None,
        }
    }
}

/// Display state of every checklist indicator.
///
/// Starts out neutral and is overwritten wholesale by [`Checklist::apply`], so
/// nothing from an earlier keystroke can survive the next one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Checklist {
    length: DisplayState,
    uppercase: DisplayState,
    symbol: DisplayState,
    matches: DisplayState,
}

impl Checklist {
    pub fn from_rules(rules: &PasswordRules) -> Self {
        let mut checklist = Self::default();
        checklist.apply(rules);
        checklist
    }

    pub fn apply(&mut self, rules: &PasswordRules) {
        self.length = DisplayState::from_rule(rules.has_min_length);
        self.uppercase = DisplayState::from_rule(rules.has_uppercase);
        self.symbol = DisplayState::from_rule(rules.has_symbol);
        self.matches = DisplayState::from_rule(rules.matches_confirmation);
    }

    pub fn state(&self, item: ChecklistItem) -> DisplayState {
        match item {
            ChecklistItem::Length => self.length,
            ChecklistItem::Uppercase => self.uppercase,
            ChecklistItem::Symbol => self.symbol,
            ChecklistItem::Match => self.matches,
        }
    }

    pub fn all_valid(&self) -> bool {
        ChecklistItem::ALL
            .iter()
            .all(|item| self.state(*item) == DisplayState::Valid)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

impl Visibility {
    /// Class toggled on the checklist panel.
    pub fn class_name<'a>(&self, classes: &'a ClassNames) -> &'a str {
        match self {
            Self::Shown => &classes.show,
            Self::Hidden => &classes.hidden,
        }
    }
}

/// Show/hide machine for the checklist panel.
///
/// A blur does not hide the panel directly: it hands out a ticket, and the
/// caller redeems it once the debounce delay has passed, together with whether
/// focus is *currently* inside one of the password fields. Tickets issued
/// before the latest focus or blur are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChecklistVisibility {
    state: Visibility,
    generation: u32,
    pending: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HideTicket(u32);

impl ChecklistVisibility {
    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn is_shown(&self) -> bool {
        self.state == Visibility::Shown
    }

    pub fn has_pending_hide(&self) -> bool {
        self.pending.is_some()
    }

    pub fn on_focus(&mut self) -> Visibility {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
        self.state = Visibility::Shown;
        self.state
    }

    pub fn on_blur(&mut self) -> HideTicket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(self.generation);
        HideTicket(self.generation)
    }

    pub fn on_hide_timer(&mut self, ticket: HideTicket, focus_in_fields: bool) -> Visibility {
        if self.pending != Some(ticket.0) {
            return self.state;
        }
        self.pending = None;
        if !focus_in_fields {
            self.state = Visibility::Hidden;
        }
        self.state
    }
}
