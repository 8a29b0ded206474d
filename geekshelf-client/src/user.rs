use geekshelf_core::util::int_or_zero;
use geekshelf_core::{PersonImage, User};

use crate::cancel::CancelToken;
use crate::client::BggClient;
use crate::decode::decode_xml;
use crate::error::BggError;
use crate::http::{Params, Transport};
use crate::types::{PersonItems, UserXml};

const USER_PATH: &str = "xmlapi2/user";
const PERSON_PATH: &str = "xmlapi2/person";

/// Decode an `xmlapi2/user` document.
pub fn decode_user(body: &[u8]) -> Result<User, BggError> {
    let doc: UserXml = decode_xml("user", "user", body)?;
    Ok(User {
        user_id: int_or_zero(&doc.id),
        user_name: doc.name,
        first_name: doc.firstname.value,
        last_name: doc.lastname.value,
        year_registered: doc.yearregistered.int(),
        avatar_link: doc.avatarlink.value,
    })
}

/// Decode an `xmlapi2/person` document. The id is the one that was asked for.
pub fn decode_person_image(id: i64, body: &[u8]) -> Result<PersonImage, BggError> {
    let doc: PersonItems = decode_xml("person", "items", body)?;
    Ok(PersonImage {
        id,
        thumbnail: doc.item.thumbnail.trim().to_string(),
        image: doc.item.image.trim().to_string(),
    })
}

impl<T: Transport> BggClient<T> {
    pub async fn get_user(&self, cancel: &CancelToken, username: &str) -> Result<User, BggError> {
        if username.trim().is_empty() {
            return Err(BggError::invalid("user", "username must not be empty"));
        }
        let mut params = Params::new();
        params.insert("name", username.to_string());
        let response = self.get_ok(cancel, "user", USER_PATH, &params).await?;
        decode_user(&response.body)
    }

    /// Portrait links of a person (designer, artist, ...).
    pub async fn person_image(
        &self,
        cancel: &CancelToken,
        id: i64,
    ) -> Result<PersonImage, BggError> {
        let mut params = Params::new();
        params.insert("id", id.to_string());
        let response = self.get_ok(cancel, "person", PERSON_PATH, &params).await?;
        decode_person_image(id, &response.body)
    }
}
