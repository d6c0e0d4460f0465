mod weight;

pub use weight::WeightRecord;
