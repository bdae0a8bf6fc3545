pub mod criteria;
pub mod field;
pub mod set;

pub use criteria::SearchCriteria;
pub use field::Field;
pub use set::FilterSet;
