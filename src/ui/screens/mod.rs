pub(crate) mod add;
pub(crate) mod budget;
pub(crate) mod dashboard;
pub(crate) mod expenses;
