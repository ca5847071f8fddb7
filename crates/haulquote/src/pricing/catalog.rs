use super::matching::{normalize_label, LabelIndex, MatchKind};
use super::tables::{CategoryFee, ItemProfile, PricingTables};

/// Item profiles with their label index, shared by the dimension and labor estimators.
#[derive(Debug, Clone)]
pub struct ItemCatalog {
    profiles: Vec<ItemProfile>,
    fallback: ItemProfile,
    index: LabelIndex,
}

/// Profile a label resolved to.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedItem<'a> {
    pub profile: &'a ItemProfile,
    /// `None` when the label matched nothing and the fallback profile applies.
    pub matched: Option<MatchedBy>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchedBy {
    Key,
    Synonym,
    Phrase,
}

fn matched_by(kind: MatchKind) -> MatchedBy {
    match kind {
        MatchKind::Exact => MatchedBy::Key,
        MatchKind::Synonym => MatchedBy::Synonym,
        MatchKind::Phrase => MatchedBy::Phrase,
    }
}

impl<'a> ResolvedItem<'a> {
    pub fn matched_key(&self) -> Option<&'a str> {
        self.matched.map(|_| self.profile.key.as_str())
    }
}

impl ItemCatalog {
    pub fn new(profiles: Vec<ItemProfile>, fallback: ItemProfile) -> Self {
        let index = LabelIndex::build(
            profiles
                .iter()
                .map(|profile| (profile.key.as_str(), profile.synonyms.iter())),
        );
        Self {
            profiles,
            fallback,
            index,
        }
    }

    pub fn from_tables(tables: &PricingTables) -> Self {
        Self::new(tables.items.clone(), tables.default_item.clone())
    }

    pub fn resolve(&self, label: &str) -> ResolvedItem<'_> {
        match self
            .index
            .resolve(label)
            .and_then(|(entry, kind)| self.profiles.get(entry).map(|profile| (profile, kind)))
        {
            Some((profile, kind)) => ResolvedItem {
                profile,
                matched: Some(matched_by(kind)),
            },
            None => {
                tracing::debug!(label, "no item profile matched, using generic profile");
                ResolvedItem {
                    profile: &self.fallback,
                    matched: None,
                }
            }
        }
    }

    pub fn fallback(&self) -> &ItemProfile {
        &self.fallback
    }
}

/// Per-unit disposal fees keyed by category label.
#[derive(Debug, Clone)]
pub struct CategoryFeeSchedule {
    fees: Vec<CategoryFee>,
    default_fee: f64,
    index: LabelIndex,
}

impl CategoryFeeSchedule {
    pub fn new(fees: Vec<CategoryFee>, default_fee: f64) -> Self {
        let index = LabelIndex::build(
            fees.iter()
                .map(|category| (category.key.as_str(), category.synonyms.iter())),
        );
        Self {
            fees,
            default_fee,
            index,
        }
    }

    pub fn from_tables(tables: &PricingTables) -> Self {
        Self::new(tables.categories.clone(), tables.default_category_fee)
    }

    /// Fee for one unit in `category`; unmatched categories pay the default fee.
    pub fn fee_for(&self, category: &str) -> f64 {
        self.index
            .resolve(category)
            .and_then(|(entry, _)| self.fees.get(entry))
            .map(|category| category.fee)
            .unwrap_or(self.default_fee)
    }

    /// Table key `category` resolves to, if any.
    pub fn resolve_key(&self, category: &str) -> Option<&str> {
        self.index
            .resolve(category)
            .and_then(|(entry, _)| self.fees.get(entry))
            .map(|category| category.key.as_str())
    }

    /// Grouping key for `category`: its table key, or the normalized label when it matches
    /// nothing so unknown categories still group with themselves.
    pub fn category_key(&self, category: &str) -> String {
        self.resolve_key(category)
            .map(str::to_string)
            .unwrap_or_else(|| normalize_label(category))
    }
}
