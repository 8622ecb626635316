mod ffp_opt;

#[doc(inline)]
pub use ffp_opt::FFPOptimizer;

#[doc(inline)]
pub use ffp_opt::item_placement_order;
