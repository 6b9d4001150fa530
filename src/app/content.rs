//! Static content blocks for every view of the deck

#![warn(clippy::all, rust_2018_idioms)]

use super::sections::{Section, View, ViewRouter};

/// How the items of a block are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockLayout {
    Bullets,
    Cards,
    /// Items are replaced by the computed ROI steps
    RoiWorkedExample,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentItem {
    pub title: &'static str,
    pub text: &'static str,
    pub price: Option<&'static str>,
    pub note: Option<&'static str>,
}

impl ContentItem {
    const fn new(title: &'static str, text: &'static str) -> Self {
        Self {
            title,
            text,
            price: None,
            note: None,
        }
    }

    const fn priced(
        title: &'static str,
        text: &'static str,
        price: &'static str,
        note: &'static str,
    ) -> Self {
        Self {
            title,
            text,
            price: Some(price),
            note: Some(note),
        }
    }
}

/// Highlighted box drawn under the items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Callout {
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBlock {
    pub view: View,
    pub heading: &'static str,
    pub intro: &'static [&'static str],
    pub layout: BlockLayout,
    pub items: &'static [ContentItem],
    pub closing: Option<&'static str>,
    pub callout: Option<Callout>,
}

pub const DECK_TITLE: &str = "Manufacturers Offers";
pub const OFFER_TITLE: &str = "Your Strategic Partner";
pub const OFFER_SUBTITLE: &str = "For Proactive Stock-Out Management";

const CHALLENGE: ContentBlock = ContentBlock {
    view: View::Section(Section::Challenge),
    heading: "The Challenge: When 3% of Ruptures Threaten 100% of Your Business",
    intro: &[
        "Stock-outs are constant, but the real threat lies in strategic ruptures of fast movers. \
         For a manufacturer with €100 million annual revenue, the 3% of ruptures that hit \
         high-demand parts cause direct and immediate lost revenue for your customers.",
    ],
    layout: BlockLayout::Bullets,
    items: &[
        ContentItem::new(
            "Direct Financial Impact on Clients",
            "A workshop cannot repair, a distributor cannot sell.",
        ),
        ContentItem::new(
            "Erosion of Trust and Brand Image",
            "Customers look for alternatives, threatening market share and customer lifetime value.",
        ),
        ContentItem::new(
            "Compliance & Reputation Risk",
            "Unmanaged ruptures lead to contractual penalties and warranty issues.",
        ),
        ContentItem::new(
            "Internal Resource Drain",
            "Sales and after-sales teams are pulled away from value-generating work.",
        ),
    ],
    closing: Some(
        "These strategic ruptures are critical failure points with disproportionate \
         repercussions on revenue, reputation and compliance.",
    ),
    callout: None,
};

const SOLUTION: ContentBlock = ContentBlock {
    view: View::Section(Section::Solution),
    heading: "Our Solution: Comprehensive Risk Mitigation",
    intro: &[
        "Marketparts turns strategic ruptures into a demonstration of your excellence, \
         using its network and tooling on your behalf.",
    ],
    layout: BlockLayout::Bullets,
    items: &[
        ContentItem::new(
            "Proactive & Compliant Detection",
            "AI detection connected to your ERP and distributor network identifies critical \
             fast-mover ruptures in a GDPR compliant way.",
        ),
        ContentItem::new(
            "Validated Co-Communication",
            "Our teams contact the impacted client in your name with pre-approved messaging.",
        ),
        ContentItem::new(
            "Optimized Fulfillment via Marketparts Network",
            "Alternative sources in our distributor network prevent a permanent lost sale.",
        ),
        ContentItem::new(
            "Transparent Reporting & Continuous Improvement",
            "Reports on resolution times and satisfaction feed your supply chain planning.",
        ),
    ],
    closing: None,
    callout: None,
};

const BENEFITS: ContentBlock = ContentBlock {
    view: View::Section(Section::Benefits),
    heading: "Your Immediate Added Value",
    intro: &["We become a strategic extension of your brand, protecting market share and client relationships."],
    layout: BlockLayout::Bullets,
    items: &[
        ContentItem::new(
            "Client Retention & Brand Integrity",
            "Customers stay loyal to your brand instead of turning to competitors.",
        ),
        ContentItem::new(
            "Resource Optimization & Strategic Focus",
            "Internal teams leave crisis management behind and focus on growth.",
        ),
        ContentItem::new(
            "Market Share Protection & Lost Sale Mitigation",
            "The part still reaches the customer, so competitors do not capture the sale.",
        ),
        ContentItem::new(
            "Valuable Supply Chain Insights",
            "Rupture pattern analysis highlights weaknesses in forecasting and supply.",
        ),
    ],
    closing: None,
    callout: None,
};

const EXPECTATIONS: ContentBlock = ContentBlock {
    view: View::Section(Section::Expectations),
    heading: "Our Partnership: Your Role in Maximizing Success",
    intro: &["Your active participation is key to seamless customer communication."],
    layout: BlockLayout::Cards,
    items: &[
        ContentItem::new(
            "Timely & Accurate Data Sharing",
            "Real-time access to stock levels, incoming shipments and order statuses.",
        ),
        ContentItem::new(
            "Dedicated Internal Point of Contact",
            "A responsive contact for quick answers and rapid decisions.",
        ),
        ContentItem::new(
            "Collaborative Communication Guidelines",
            "Your brand's tone of voice and key messaging for joint communication.",
        ),
        ContentItem::new(
            "Constructive Feedback",
            "Regular reviews to keep refining the service.",
        ),
    ],
    closing: None,
    callout: None,
};

const PRICING: ContentBlock = ContentBlock {
    view: View::Section(Section::Pricing),
    heading: "Our Pricing Model: Fixed + Incentive",
    intro: &["The predictability of a subscription combined with an incentive aligned with the value we preserve."],
    layout: BlockLayout::Cards,
    items: &[
        ContentItem::priced(
            "Access & Maintenance Fee",
            "Integration, platform access and dedicated support.",
            "€2,000 - €10,000+ / month",
            "Adjusted based on complexity, data volume, and SLA.",
        ),
        ContentItem::priced(
            "Incentive on Managed Revenue",
            "A percentage of the ex-tax revenue of each stock-out transaction fulfilled via our network.",
            "3% to 7% per transaction",
            "We are rewarded on the value we help you secure.",
        ),
    ],
    closing: None,
    callout: None,
};

const ROI: ContentBlock = ContentBlock {
    view: View::Section(Section::Roi),
    heading: "Return on Investment (ROI)",
    intro: &[
        "Marketparts works like a strategic insurance policy: we prevent costly losses and \
         preserve client relationships and market share.",
    ],
    layout: BlockLayout::RoiWorkedExample,
    items: &[],
    closing: None,
    callout: Some(Callout {
        title: "Hidden Cost Alert: Logistic Penalties",
        text: "Many contracts include financial penalties for non-delivery. Facilitating \
               alternative fulfillment adds a further layer of insurance.",
    }),
};

const DATA_MANAGEMENT: ContentBlock = ContentBlock {
    view: View::DataManagement,
    heading: "Offer 2: Data Management",
    intro: &[
        "Marketparts data management helps manufacturers turn their data into better \
         insights, predictive analytics and optimized inventory strategies.",
    ],
    layout: BlockLayout::Bullets,
    items: &[
        ContentItem::new("Data Harmonization & Centralization", ""),
        ContentItem::new("Advanced Analytics & Reporting", ""),
        ContentItem::new("Predictive Demand Forecasting", ""),
        ContentItem::new("Inventory Optimization Consulting", ""),
    ],
    closing: Some("More details on turning your data into a strategic asset are coming soon."),
    callout: None,
};

/// The single block associated with a view
pub fn block_for(view: View) -> &'static ContentBlock {
    match view {
        View::Section(Section::Challenge) => &CHALLENGE,
        View::Section(Section::Solution) => &SOLUTION,
        View::Section(Section::Benefits) => &BENEFITS,
        View::Section(Section::Expectations) => &EXPECTATIONS,
        View::Section(Section::Pricing) => &PRICING,
        View::Section(Section::Roi) => &ROI,
        View::DataManagement => &DATA_MANAGEMENT,
    }
}

impl ViewRouter {
    /// The one block that is visible right now
    pub fn visible_block(&self) -> &'static ContentBlock {
        block_for(self.current_view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::sections::Offer;

    #[test]
    fn test_every_view_maps_to_its_own_block() {
        for section in Section::ALL {
            let view = View::Section(section);
            assert_eq!(block_for(view).view, view);
        }
        assert_eq!(block_for(View::DataManagement).view, View::DataManagement);
    }

    #[test]
    fn test_visible_block_follows_router() {
        let mut router = ViewRouter::new();
        for section in Section::ALL {
            router.select(section);
            assert_eq!(router.visible_block().view, View::Section(section));
        }
        router.select_offer(Offer::DataManagement);
        assert_eq!(router.visible_block().heading, DATA_MANAGEMENT.heading);
    }

    #[test]
    fn test_only_roi_block_uses_worked_example() {
        for section in Section::ALL {
            let block = block_for(View::Section(section));
            assert_eq!(
                block.layout == BlockLayout::RoiWorkedExample,
                section == Section::Roi
            );
        }
    }
}
