use crate::leads::{LeadClient, LeadForm, LeadOutcome};
use crate::models::{Operation, Property, PropertyType};
use crate::search::filter::{filter_properties, FilterState, ANY};
use crate::search::traits::IntentExtractor;
use crate::search::types::{ExtractedIntent, ZonePolicy};
use tracing::{debug, info};

/// Page section currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Catalog,
    Sell,
    Contact,
}

/// Handle for one in-flight search. Results are only applied while the
/// ticket's generation is current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    query: String,
}

impl SearchTicket {
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// What happened to a search result
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Nothing was sent: empty query, a search already in flight, or torn down
    Skipped,
    /// Extraction failed; filters were left untouched
    Unchanged,
    /// Filters were rewritten from the extracted intent
    Applied(ExtractedIntent),
    /// The result belonged to a superseded request or arrived after teardown
    Discarded,
}

/// Search-related UI state for one page
#[derive(Debug, Default)]
pub struct ViewModel {
    pub filters: FilterState,
    pub view: View,
    /// Feedback from the last applied extraction
    pub explanation: Option<String>,
    pub lead_submitted: bool,
    zone_policy: ZonePolicy,
    processing: bool,
    generation: u64,
    torn_down: bool,
}

impl ViewModel {
    pub fn new(zone_policy: ZonePolicy) -> Self {
        Self {
            zone_policy,
            ..Self::default()
        }
    }

    /// True while an extraction is in flight; the UI disables re-submission
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn zone_policy(&self) -> ZonePolicy {
        self.zone_policy
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filters.query = query.into();
    }

    /// Restore every constraint to its sentinel, keeping the typed query
    pub fn reset_filters(&mut self) {
        let query = std::mem::take(&mut self.filters.query);
        self.filters = FilterState {
            query,
            ..FilterState::default()
        };
        self.explanation = None;
    }

    /// Listings visible under the current filters
    pub fn visible_properties<'a>(&self, properties: &'a [Property]) -> Vec<&'a Property> {
        filter_properties(&self.filters, properties)
    }

    /// Start a search for the current query.
    /// Returns `None` for a blank query, while another search is in flight,
    /// or after teardown.
    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        if self.torn_down || self.processing {
            return None;
        }

        let query = self.filters.query.trim();
        if query.is_empty() {
            return None;
        }

        self.generation += 1;
        self.processing = true;

        Some(SearchTicket {
            generation: self.generation,
            query: query.to_string(),
        })
    }

    /// Apply the result of the search identified by `ticket`
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        result: Option<ExtractedIntent>,
    ) -> SearchOutcome {
        if self.torn_down || ticket.generation != self.generation {
            debug!("Discarding result for superseded search {:?}", ticket.query);
            return SearchOutcome::Discarded;
        }

        self.processing = false;

        match result {
            Some(intent) => {
                self.apply_intent(&intent);
                self.view = View::Catalog;
                info!("Applied search filters for {:?}", ticket.query);
                SearchOutcome::Applied(intent)
            }
            None => SearchOutcome::Unchanged,
        }
    }

    /// Abandon the in-flight search; its result will be discarded
    pub fn cancel_search(&mut self) {
        if self.processing {
            self.generation += 1;
            self.processing = false;
        }
    }

    /// The page is going away: no later result may touch this state
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.processing = false;
        self.generation += 1;
    }

    /// Run a full search round-trip against `extractor`
    pub async fn submit_search(&mut self, extractor: &dyn IntentExtractor) -> SearchOutcome {
        let Some(ticket) = self.begin_search() else {
            return SearchOutcome::Skipped;
        };

        debug!(
            "Submitting {:?} to {}",
            ticket.query(),
            extractor.provider_name()
        );
        let result = extractor.extract(ticket.query()).await;
        self.complete_search(ticket, result)
    }

    /// Send the contact form and flip the confirmation flag on success
    pub async fn submit_lead(&mut self, client: &LeadClient, form: &LeadForm) -> LeadOutcome {
        let outcome = client.submit(form).await;
        if outcome == LeadOutcome::Submitted {
            self.lead_submitted = true;
        }
        outcome
    }

    /// Operation and type are always re-derived from the query; prior manual
    /// selections for those two fields do not survive a successful extraction.
    fn apply_intent(&mut self, intent: &ExtractedIntent) {
        self.filters.operation = intent
            .operation
            .as_deref()
            .and_then(Operation::parse_label)
            .map(|op| op.as_str().to_string())
            .unwrap_or_else(|| ANY.to_string());

        self.filters.property_type = intent
            .property_type
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(|label| PropertyType::from_label(label).as_str().to_string())
            .unwrap_or_else(|| ANY.to_string());

        self.filters.max_price = intent
            .max_price
            .map(|price| price.to_string())
            .unwrap_or_default();

        if self.zone_policy == ZonePolicy::Overwrite {
            self.filters.zone = intent
                .zone
                .as_deref()
                .map(str::trim)
                .filter(|zone| !zone.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| ANY.to_string());
        }

        self.explanation = intent.explanation.clone();
    }
}
