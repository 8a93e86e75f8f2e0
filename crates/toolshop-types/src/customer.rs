use crate::entity::{Draft, Entity, EntityId, EntityKind, contains_folded};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

impl Entity for Customer {
    type Draft = CustomerDraft;

    const KIND: EntityKind = EntityKind::Customer;

    fn id(&self) -> EntityId {
        self.id
    }

    fn to_draft(&self) -> CustomerDraft {
        CustomerDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            postal_code: self.postal_code.clone(),
        }
    }

    fn from_draft(draft: CustomerDraft, id: EntityId) -> Self {
        Customer {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            address: draft.address,
            city: draft.city,
            state: draft.state,
            postal_code: draft.postal_code,
        }
    }

    fn matches(&self, needle: &str) -> bool {
        contains_folded(&self.name, needle) || contains_folded(&self.email, needle)
    }
}

impl Draft for CustomerDraft {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
            ("address", self.address.clone()),
            ("city", self.city.clone()),
            ("state", self.state.clone()),
            ("postal_code", self.postal_code.clone()),
        ]
    }

    fn set_field(&mut self, field: &str, value: &str) -> Result<()> {
        let slot = match field {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "address" => &mut self.address,
            "city" => &mut self.city,
            "state" => &mut self.state,
            "postal_code" | "postalCode" | "cep" => &mut self.postal_code,
            other => {
                return Err(Error::UnknownField {
                    kind: EntityKind::Customer.singular(),
                    field: other.to_string(),
                });
            }
        };
        *slot = value.to_string();
        Ok(())
    }
}
