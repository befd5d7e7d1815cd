use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::shared_types::ApiResponse;

use super::{non_empty, validator::ValidateField, CommandError, Pixela};

#[skip_serializing_none]
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CreateUserReq<'a> {
    username: &'a str,
    token: &'a str,
    agree_terms_of_service: Option<&'a str>,
    not_minor: Option<&'a str>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct UpdateUserReq<'a> {
    new_token: &'a str,
}

impl Pixela {
    /// registers the client's username/token pair on pixe.la
    pub async fn create_user(
        &self,
        agree_terms_of_service: &str,
        not_minor: &str,
    ) -> Result<ApiResponse, CommandError> {
        const OP: &str = "user create";

        self.validate(
            OP,
            &ValidateField {
                agree_terms_of_service: Some(agree_terms_of_service),
                not_minor: Some(not_minor),
                ..Default::default()
            },
        )?;

        let payload = Self::encode(
            OP,
            &CreateUserReq {
                username: &self.username,
                token: &self.token,
                agree_terms_of_service: non_empty(Some(agree_terms_of_service)),
                not_minor: non_empty(Some(not_minor)),
            },
        )?;

        let body = self
            .post(self.endpoint(["v1", "users"]), Some(payload))
            .await
            .map_err(|err| CommandError::new(OP, err))?;

        Self::decode(OP, &body)
    }

    pub async fn update_user(&self, new_token: &str) -> Result<ApiResponse, CommandError> {
        const OP: &str = "user update";

        self.validator
            .validate_required(&ValidateField {
                new_token: Some(new_token),
                ..Default::default()
            })
            .map_err(|err| CommandError::new(OP, err))?;

        let payload = Self::encode(OP, &UpdateUserReq { new_token })?;

        let body = self
            .put(self.user_endpoint(&[]), Some(payload))
            .await
            .map_err(|err| CommandError::new(OP, err))?;

        Self::decode(OP, &body)
    }

    /// deletes the user this client was built for
    pub async fn delete_user(&self) -> Result<ApiResponse, CommandError> {
        const OP: &str = "user delete";

        let body = self
            .delete(self.user_endpoint(&[]))
            .await
            .map_err(|err| CommandError::new(OP, err))?;

        Self::decode(OP, &body)
    }
}
