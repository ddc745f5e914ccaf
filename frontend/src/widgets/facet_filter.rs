//! Two independent equality facets over a fixed catalog.

use crate::widgets::catalog::{Course, Difficulty};

pub const ALL: &str = "All";

/// One facet selection: either the `All` sentinel or a concrete value.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Facet {
    #[default]
    All,
    Value(String),
}

impl Facet {
    /// Parses a button label; the literal `"All"` maps to the sentinel.
    pub fn from_label(label: &str) -> Self {
        if label == ALL {
            Facet::All
        } else {
            Facet::Value(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Facet::All => ALL,
            Facet::Value(v) => v,
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Facet::All => true,
            Facet::Value(v) => v == value,
        }
    }
}

/// Anything carrying a category and a difficulty facet.
pub trait Faceted {
    fn category(&self) -> &str;
    fn difficulty(&self) -> &str;
}

impl Faceted for Course {
    fn category(&self) -> &str {
        self.category
    }

    fn difficulty(&self) -> &str {
        self.difficulty.as_str()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FilterState {
    pub category: Facet,
    pub difficulty: Facet,
}

impl FilterState {
    pub fn with_category(&self, category: Facet) -> Self {
        Self {
            category,
            difficulty: self.difficulty.clone(),
        }
    }

    pub fn with_difficulty(&self, difficulty: Facet) -> Self {
        Self {
            category: self.category.clone(),
            difficulty,
        }
    }

    pub fn accepts<T: Faceted>(&self, item: &T) -> bool {
        self.category.matches(item.category()) && self.difficulty.matches(item.difficulty())
    }
}

/// Items passing both facets, in catalog order.
pub fn filter<'a, T: Faceted>(catalog: &'a [T], state: &FilterState) -> Vec<&'a T> {
    catalog.iter().filter(|item| state.accepts(*item)).collect()
}

/// `All` followed by each distinct category in first-occurrence order.
pub fn category_options<T: Faceted>(catalog: &[T]) -> Vec<String> {
    let mut options = vec![ALL.to_string()];
    for item in catalog {
        if !options.iter().any(|o| o == item.category()) {
            options.push(item.category().to_string());
        }
    }
    options
}

pub fn difficulty_options() -> Vec<String> {
    std::iter::once(ALL)
        .chain(Difficulty::ORDERED.iter().map(|d| d.as_str()))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::catalog::COURSES;

    fn value(v: &str) -> Facet {
        Facet::Value(v.to_string())
    }

    #[test]
    fn all_all_returns_whole_catalog() {
        let result = filter(COURSES, &FilterState::default());
        assert_eq!(result.len(), COURSES.len());
        assert!(result.iter().zip(COURSES).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn cybersecurity_any_difficulty() {
        let state = FilterState::default().with_category(value("Cybersecurity"));
        let ids: Vec<u32> = filter(COURSES, &state).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 5]);
    }

    #[test]
    fn every_state_yields_matching_subset() {
        for category in category_options(COURSES) {
            for difficulty in difficulty_options() {
                let state = FilterState {
                    category: Facet::from_label(&category),
                    difficulty: Facet::from_label(&difficulty),
                };
                for course in filter(COURSES, &state) {
                    assert!(COURSES.iter().any(|c| c.id == course.id));
                    assert!(category == ALL || course.category == category);
                    assert!(difficulty == ALL || course.difficulty.as_str() == difficulty);
                }
            }
        }
    }

    #[test]
    fn selecting_one_facet_keeps_the_other() {
        let state = FilterState::default()
            .with_difficulty(value("Intermediate"))
            .with_category(value("Programming"));
        assert_eq!(state.difficulty, value("Intermediate"));
        let ids: Vec<u32> = filter(COURSES, &state).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn unknown_value_matches_nothing() {
        let state = FilterState::default().with_category(value("Basket Weaving"));
        assert!(filter(COURSES, &state).is_empty());
    }

    #[test]
    fn option_orders() {
        assert_eq!(
            category_options(COURSES),
            vec!["All", "Engineering", "Cybersecurity", "Programming", "AI & ML", "Design", "Networking"]
        );
        assert_eq!(difficulty_options(), vec!["All", "Beginner", "Intermediate", "Advanced"]);
    }

    #[test]
    fn all_label_round_trips_to_sentinel() {
        assert_eq!(Facet::from_label("All"), Facet::All);
        assert_eq!(Facet::All.label(), "All");
    }
}
