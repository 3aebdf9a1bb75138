/// Raw request body of a contact form submission. Absent keys deserialize to
/// empty strings so that missing and empty fields are rejected alike.
#[derive(serde::Deserialize, Debug)]
pub struct ContactPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(serde::Serialize)]
pub struct SendConfirmation {
    pub message: String,
    #[serde(rename = "messageId")]
    pub message_id: String,
}

#[derive(serde::Serialize)]
pub struct ErrorBody {
    pub error: String,
}
