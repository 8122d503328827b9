mod action_link;

pub use action_link::ActionLinkRow;
