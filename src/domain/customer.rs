pub type CustomerId = u32;

/// Contact details of an account holder. Not persisted; accounts only keep
/// the `customer_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

impl Customer {
    pub fn new(
        customer_id: CustomerId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            customer_id,
            name: name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
        }
    }
}
