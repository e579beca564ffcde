//! Corporate-jargon word bank

/// A named, ordered list of capitalized words
pub struct Category {
    pub name: &'static str,
    pub words: &'static [&'static str],
}

/// Categorized mapping of category name to word list.
///
/// Words are not unique across categories ("Optimization" appears twice in the
/// reference data).
pub struct WordBank {
    categories: &'static [Category],
}

/// Name of the category used as the corporate-mode fallback pool
pub const GENERAL_CATEGORY: &str = "general_words";

impl WordBank {
    /// Iterate over every word in every category, in category order
    pub fn all_words(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.categories.iter().flat_map(|c| c.words.iter().copied())
    }

    /// Look up a category's word list by name
    pub fn category(&self, name: &str) -> Option<&'static [&'static str]> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.words)
    }

    /// Names of all categories, in order
    pub fn category_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.categories.iter().map(|c| c.name)
    }
}

/// The corporate jargon word bank
pub const CORPORATE_JARGON: WordBank = WordBank {
    categories: &[
        Category {
            name: "business_words",
            words: &[
                "Business",
                "Brand",
                "Breakthrough",
                "Benchmark",
                "Bandwidth",
                "Blockchain",
                "Bootstrap",
                "Brainstorm",
                "Blueprint",
                "Buyout",
                "Ballpark",
                "Bottom-line",
            ],
        },
        Category {
            name: "optimization_words",
            words: &[
                "Optimization",
                "Opportunity",
                "Operations",
                "Objectives",
                "Outcomes",
                "Oversight",
                "Outsourcing",
                "Orchestration",
                "Organic",
                "Onboarding",
                "Offerings",
                "Offline",
            ],
        },
        Category {
            name: "general_words",
            words: &[
                "Synergy",
                "Leverage",
                "Paradigm",
                "Innovation",
                "Strategy",
                "Solution",
                "Framework",
                "Platform",
                "Ecosystem",
                "Methodology",
                "Architecture",
                "Scalability",
                "Monetization",
                "Disruption",
                "Transformation",
                "Optimization",
                "Engagement",
                "Alignment",
                "Integration",
                "Implementation",
                "Deliverables",
                "Stakeholders",
            ],
        },
    ],
};
