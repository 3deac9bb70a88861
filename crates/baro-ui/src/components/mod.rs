pub mod arcs;
pub mod fields;
pub mod gauge;
pub mod gradients;
pub mod pointer;
pub mod settings_card;
pub mod shape;
pub mod tick_labels;
pub mod tiles;
pub mod tooltip;
