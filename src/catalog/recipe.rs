//! Recipe records as the catalog serves them.
//!
//! The wire shape spreads ingredients over 40 numbered keys
//! (`strIngredient1..20` / `strMeasure1..20`), with blanks and nulls mixed
//! in freely and no guarantee that populated slots are contiguous. In
//! memory that becomes one fixed-length sequence of optional slots; the
//! hand-written serde below converts between the two without losing the
//! wire shape, so persisted records stay readable by anything that speaks
//! the catalog's JSON.

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of ingredient/measure slots a catalog record carries.
pub const INGREDIENT_SLOTS: usize = 20;

/// One populated ingredient slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    /// Absent when the catalog left the measure blank.
    pub measure: Option<String>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, measure: Option<&str>) -> Self {
        Self {
            name: name.into(),
            measure: measure.map(str::to_owned),
        }
    }
}

/// A single catalog entry.
///
/// Filter routes return partial records (identifier, name, thumbnail only),
/// so everything beyond identifier and name is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    /// Catalog-assigned, stable identifier.
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: Option<String>,
    pub thumbnail: Option<String>,
    /// External video reference, when the catalog has one.
    pub youtube: Option<String>,
    slots: Vec<Option<Ingredient>>,
}

impl Recipe {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: None,
            area: None,
            instructions: None,
            thumbnail: None,
            youtube: None,
            slots: vec![None; INGREDIENT_SLOTS],
        }
    }

    /// Populated ingredient entries in slot order.
    ///
    /// Scans the whole slot range: entries past the first gap still count.
    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.slots.iter().flatten()
    }

    /// Place an ingredient into a zero-based slot.
    ///
    /// Panics when `slot` is `INGREDIENT_SLOTS` or beyond.
    pub fn set_ingredient(&mut self, slot: usize, ingredient: Ingredient) {
        self.slots[slot] = Some(ingredient);
    }
}

/// Blank-after-trim and null are indistinguishable on the wire; both decode
/// to absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    })
}

enum WireKey {
    Id,
    Name,
    Category,
    Area,
    Instructions,
    Thumbnail,
    Youtube,
    /// Zero-based slot index.
    Ingredient(usize),
    Measure(usize),
    Other,
}

fn classify(key: &str) -> WireKey {
    match key {
        "idMeal" => WireKey::Id,
        "strMeal" => WireKey::Name,
        "strCategory" => WireKey::Category,
        "strArea" => WireKey::Area,
        "strInstructions" => WireKey::Instructions,
        "strMealThumb" => WireKey::Thumbnail,
        "strYoutube" => WireKey::Youtube,
        _ => {
            if let Some(slot) = numbered_key(key, "strIngredient") {
                WireKey::Ingredient(slot)
            } else if let Some(slot) = numbered_key(key, "strMeasure") {
                WireKey::Measure(slot)
            } else {
                WireKey::Other
            }
        }
    }
}

/// `strIngredient7` -> `Some(6)`; anything outside `1..=INGREDIENT_SLOTS`
/// is treated as an unknown key.
fn numbered_key(key: &str, prefix: &str) -> Option<usize> {
    let number: usize = key.strip_prefix(prefix)?.parse().ok()?;
    if (1..=INGREDIENT_SLOTS).contains(&number) {
        Some(number - 1)
    } else {
        None
    }
}

impl<'de> Deserialize<'de> for Recipe {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RecipeVisitor)
    }
}

struct RecipeVisitor;

impl<'de> Visitor<'de> for RecipeVisitor {
    type Value = Recipe;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a recipe object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Recipe, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut id = None;
        let mut name = None;
        let mut category = None;
        let mut area = None;
        let mut instructions = None;
        let mut thumbnail = None;
        let mut youtube = None;
        let mut ingredient_names: Vec<Option<String>> = vec![None; INGREDIENT_SLOTS];
        let mut measures: Vec<Option<String>> = vec![None; INGREDIENT_SLOTS];

        while let Some(key) = map.next_key::<String>()? {
            match classify(&key) {
                WireKey::Id => id = map.next_value::<Option<String>>()?,
                WireKey::Name => name = map.next_value::<Option<String>>()?,
                WireKey::Category => category = non_blank(map.next_value()?),
                WireKey::Area => area = non_blank(map.next_value()?),
                WireKey::Instructions => instructions = non_blank(map.next_value()?),
                WireKey::Thumbnail => thumbnail = non_blank(map.next_value()?),
                WireKey::Youtube => youtube = non_blank(map.next_value()?),
                WireKey::Ingredient(slot) => ingredient_names[slot] = non_blank(map.next_value()?),
                WireKey::Measure(slot) => measures[slot] = non_blank(map.next_value()?),
                // Unknown keys (tags, attribution, future additions) are
                // dropped; old persisted records simply lack them.
                WireKey::Other => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        let id = id.ok_or_else(|| de::Error::missing_field("idMeal"))?;
        let name = name.ok_or_else(|| de::Error::missing_field("strMeal"))?;

        // A measure only means something next to its ingredient; orphaned
        // measures are dropped with the blank slot.
        let slots = ingredient_names
            .into_iter()
            .zip(measures)
            .map(|(ingredient, measure)| {
                ingredient.map(|name| Ingredient {
                    name,
                    measure,
                })
            })
            .collect();

        Ok(Recipe {
            id,
            name,
            category,
            area,
            instructions,
            thumbnail,
            youtube,
            slots,
        })
    }
}

impl Serialize for Recipe {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("idMeal", &self.id)?;
        map.serialize_entry("strMeal", &self.name)?;
        if let Some(category) = &self.category {
            map.serialize_entry("strCategory", category)?;
        }
        if let Some(area) = &self.area {
            map.serialize_entry("strArea", area)?;
        }
        if let Some(instructions) = &self.instructions {
            map.serialize_entry("strInstructions", instructions)?;
        }
        if let Some(thumbnail) = &self.thumbnail {
            map.serialize_entry("strMealThumb", thumbnail)?;
        }
        if let Some(youtube) = &self.youtube {
            map.serialize_entry("strYoutube", youtube)?;
        }
        for (index, slot) in self.slots.iter().enumerate() {
            if let Some(ingredient) = slot {
                map.serialize_entry(&format!("strIngredient{}", index + 1), &ingredient.name)?;
                if let Some(measure) = &ingredient.measure {
                    map.serialize_entry(&format!("strMeasure{}", index + 1), measure)?;
                }
            }
        }
        map.end()
    }
}
