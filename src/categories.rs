// src/categories.rs
//
// The fixed set of MalaCards category listing pages. Callers may swap in a
// custom mapping (e.g. for a mirror or for tests); the names are otherwise
// the canonical anatomical/etiological groupings the site publishes.

use std::collections::BTreeMap;

use crate::params::BASE_URL;

pub const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    ("Blood", "/categories/blood_disease_list"),
    ("Bone", "/categories/bone_disease_list"),
    ("Cardiovascular", "/categories/cardiovascular_disease_list"),
    ("Ear", "/categories/ear_disease_list"),
    ("Endocrine", "/categories/endocrine_disease_list"),
    ("Eye", "/categories/eye_disease_list"),
    ("Gastrointestinal", "/categories/gastrointestinal_disease_list"),
    ("Immune", "/categories/immune_disease_list"),
    ("Liver", "/categories/liver_disease_list"),
    ("Mental", "/categories/mental_disease_list"),
    ("Muscle", "/categories/muscle_disease_list"),
    ("Nephrological", "/categories/nephrological_disease_list"),
    ("Neuronal", "/categories/neuronal_disease_list"),
    ("Oral", "/categories/oral_disease_list"),
    ("Reproductive", "/categories/reproductive_disease_list"),
    ("Respiratory", "/categories/respiratory_disease_list"),
    ("Skin", "/categories/skin_disease_list"),
    ("Smell/Taste", "/categories/smell_taste_disease_list"),
    ("Cancer", "/categories/cancer_disease_list"),
    ("Fetal", "/categories/fetal_disease_list"),
    ("Genetic", "/categories/genetic_disease_list"),
    ("Infectious", "/categories/infectious_disease_list"),
    ("Metabolic", "/categories/metabolic_disease_list"),
    ("Rare", "/categories/rare_diseases"),
];

/// Category name -> absolute listing URL.
pub type CategoryUrls = BTreeMap<String, String>;

pub fn default_urls() -> CategoryUrls {
    DEFAULT_CATEGORIES
        .iter()
        .map(|(name, path)| (s!(*name), join!(BASE_URL, path)))
        .collect()
}

/// Which categories a fetch should cover.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategorySelection {
    All,
    Named(Vec<String>),
}

impl CategorySelection {
    /// Resolve against a URL mapping. Unknown names are dropped silently;
    /// they surface to the caller as missing entries, not as errors.
    pub fn resolve(&self, urls: &CategoryUrls) -> Vec<(String, String)> {
        match self {
            CategorySelection::All => {
                urls.iter().map(|(n, u)| (n.clone(), u.clone())).collect()
            }
            CategorySelection::Named(names) => names
                .iter()
                .filter_map(|name| match urls.get(name) {
                    Some(url) => Some((name.clone(), url.clone())),
                    None => {
                        logd!("Unknown category '{}' ignored", name);
                        None
                    }
                })
                .collect(),
        }
    }
}
