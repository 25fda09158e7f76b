mod breakdown_panel;
mod compare;
mod contract_card;

pub use compare::ComparePage;
