pub mod training;

pub use training::{Group, NewTraining, SetList, Training, TrainingDetail, TrainingSet};
