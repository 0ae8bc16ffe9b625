//! Aggregation of stripped fragments into one namespace document

use crate::config::BundleConfig;
use crate::domain::entities::{AggregatedDocument, StrippedFragment};

/// Wraps ordered fragment bodies in the shared namespace
///
/// The aggregator does not reorder: callers hand it fragments in the
/// FragmentReader's sorted order, and equal input yields equal output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregator {
    namespace: String,
    root_interface: String,
    global_ident: String,
}

impl Aggregator {
    pub fn new(
        namespace: impl Into<String>,
        root_interface: impl Into<String>,
        global_ident: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            root_interface: root_interface.into(),
            global_ident: global_ident.into(),
        }
    }

    pub fn from_config(config: &BundleConfig) -> Self {
        Self::new(
            config.namespace.clone(),
            config.root_interface.clone(),
            config.global_ident.clone(),
        )
    }

    pub fn aggregate(&self, fragments: &[StrippedFragment]) -> AggregatedDocument {
        let mut doc =
            AggregatedDocument::new(&self.namespace, &self.root_interface, &self.global_ident);
        for fragment in fragments {
            doc.push_body(fragment.body());
        }
        doc
    }
}

/// Aggregate and render in one step
pub fn aggregate(config: &BundleConfig, fragments: &[StrippedFragment]) -> String {
    Aggregator::from_config(config).aggregate(fragments).render()
}
