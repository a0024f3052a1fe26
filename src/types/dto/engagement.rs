use serde::{Deserialize, Serialize};

/// Visitor enquiry submission
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewEnquiry {
    pub name: String,
    pub email: String,
    pub message: Option<String>,
}

/// Donation submission
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewDonation {
    pub name: String,
    pub email: String,
    pub amount: String,
    pub message: Option<String>,
}
