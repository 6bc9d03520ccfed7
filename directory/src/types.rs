use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// Structured contact details, or a bare string in degraded form.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ContactInfo {
    Details {
        #[serde(default)]
        email: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        phone: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        office: Option<String>,
    },
    Bare(String),
}

impl ContactInfo {
    /// Email address in either form; a bare value is taken as the address.
    pub fn email(&self) -> &str {
        match self {
            ContactInfo::Details { email, .. } => email,
            ContactInfo::Bare(s) => s,
        }
    }
}

impl Default for ContactInfo {
    fn default() -> Self {
        ContactInfo::Bare(String::new())
    }
}

/// Absent and `null` both decode to the default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One directory entry. Loaded once from the catalog and never mutated.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupervisorRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub department: String,
    pub research_domain: String,
    #[serde(default)]
    pub specialization: Vec<String>,
    #[serde(default)]
    pub available_slots: u32,
    #[serde(default)]
    pub max_slots: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contact_info: ContactInfo,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub is_available: bool,
}

/// Records are identified by `id` alone.
impl PartialEq for SupervisorRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SupervisorRecord {}

/// Reduced projection of a [`SupervisorRecord`] kept in persisted storage.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkEntry {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub research_domain: String,
    #[serde(default)]
    pub available_slots: u32,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contact_info: ContactInfo,
}

impl From<&SupervisorRecord> for BookmarkEntry {
    fn from(record: &SupervisorRecord) -> Self {
        // Keep just the email when there is one, otherwise whatever contact
        // value the record carries.
        let contact_info = match &record.contact_info {
            ContactInfo::Details { email, .. } if !email.is_empty() => {
                ContactInfo::Bare(email.clone())
            }
            other => other.clone(),
        };
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            research_domain: record.research_domain.clone(),
            available_slots: record.available_slots,
            rating: record.rating,
            profile_image: record.profile_image.clone(),
            contact_info,
        }
    }
}

/// Active filter criteria. The default matches every record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub domain: Option<String>,
    pub min_slots: u32,
    /// `None` is unbounded.
    pub max_slots: Option<u32>,
    pub search_query: String,
}

impl FilterSpec {
    /// Replace the slot range with the band for `availability`.
    pub fn with_availability(mut self, availability: Availability) -> Self {
        let (min, max) = availability.slot_range();
        self.min_slots = min;
        self.max_slots = max;
        self
    }
}

/// Named slot bands offered by the directory's availability picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Availability {
    High,
    Medium,
    Low,
}

impl Availability {
    pub fn slot_range(self) -> (u32, Option<u32>) {
        match self {
            Availability::High => (5, None),
            Availability::Medium => (2, Some(4)),
            Availability::Low => (0, Some(1)),
        }
    }
}

impl std::str::FromStr for Availability {
    type Err = crate::error::DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Ok(Availability::High),
            "medium" => Ok(Availability::Medium),
            "low" => Ok(Availability::Low),
            other => Err(crate::error::DirectoryError::InvalidInput(format!(
                "unknown availability band: {other}"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortCriterion {
    #[default]
    Name,
    Slots,
    Rating,
}

impl SortCriterion {
    /// Matches `slots` and `rating` exactly; anything else, including other
    /// casings, is [`SortCriterion::Name`].
    pub fn parse_or_default(s: &str) -> Self {
        match s {
            "slots" => SortCriterion::Slots,
            "rating" => SortCriterion::Rating,
            _ => SortCriterion::Name,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Only the exact string `desc` selects descending order.
    pub fn parse_or_default(s: &str) -> Self {
        if s == "desc" {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub criterion: SortCriterion,
    pub direction: SortDirection,
}
