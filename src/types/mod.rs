mod attributes;
mod charge;
mod decision;
mod evaluation_report;
mod node;
mod policy;
mod value;

pub use attributes::Attributes;
pub use charge::Charge;
pub use decision::Decision;
pub use evaluation_report::EvaluationReport;
pub use node::{AttrExpr, CompareOp, Connective, Node, attr};
pub use policy::{Policy, PolicyBuilder};
pub use value::coerce_int;
