pub(crate) mod crm;
