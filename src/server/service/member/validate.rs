//! Normalization and validation of member fields.
//!
//! Create requests and merged update requests go through the same [`MemberFields::validate`]
//! so both paths enforce identical rules.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::{MemberStatus, OrganizationType};
use sea_orm::ActiveValue;

use crate::{
    model::member::{CreateMemberDto, NaturalKey, UpdateMemberDto},
    server::{error::member::MemberError, model::db::MemberModel},
};

/// Longest accepted member code, in characters.
pub const MAX_MEMBER_CODE_LEN: usize = 64;
/// Longest accepted name, in characters.
pub const MAX_NAME_LEN: usize = 255;
/// Longest accepted position, in characters.
pub const MAX_POSITION_LEN: usize = 255;

/// The caller-controlled fields of a member.
#[derive(Clone, Debug, PartialEq)]
pub struct MemberFields {
    /// Organization the member belongs to
    pub organization_type: OrganizationType,
    /// Owning affiliation, if any
    pub affiliation_id: Option<i32>,
    /// Code unique among active members of the scope
    pub member_code: String,
    /// Display name
    pub name: String,
    /// Role within the program
    pub position: Option<String>,
    /// Program entry
    pub entry_date: Option<NaiveDate>,
    /// Graduation, required for graduated members
    pub graduated_at: Option<NaiveDate>,
    /// Start of leave, required for members on leave
    pub leave_at: Option<NaiveDate>,
    /// Return from leave
    pub active_again_at: Option<NaiveDate>,
    /// Program status
    pub status: MemberStatus,
}

impl From<CreateMemberDto> for MemberFields {
    fn from(dto: CreateMemberDto) -> Self {
        Self {
            organization_type: dto.organization_type,
            affiliation_id: dto.affiliation_id,
            member_code: dto.member_code,
            name: dto.name,
            position: dto.position,
            entry_date: dto.entry_date,
            graduated_at: dto.graduated_at,
            leave_at: dto.leave_at,
            active_again_at: dto.active_again_at,
            status: dto.status,
        }
    }
}

impl From<&MemberModel> for MemberFields {
    fn from(model: &MemberModel) -> Self {
        Self {
            organization_type: model.organization_type,
            affiliation_id: model.affiliation_id,
            member_code: model.member_code.clone(),
            name: model.name.clone(),
            position: model.position.clone(),
            entry_date: model.entry_date,
            graduated_at: model.graduated_at,
            leave_at: model.leave_at,
            active_again_at: model.active_again_at,
            status: model.status,
        }
    }
}

impl MemberFields {
    /// Overlays the fields present in an update request.
    pub fn apply(mut self, changes: &UpdateMemberDto) -> Self {
        if let Some(organization_type) = changes.organization_type {
            self.organization_type = organization_type;
        }
        if let Some(affiliation_id) = changes.affiliation_id {
            self.affiliation_id = affiliation_id;
        }
        if let Some(member_code) = &changes.member_code {
            self.member_code = member_code.clone();
        }
        if let Some(name) = &changes.name {
            self.name = name.clone();
        }
        if let Some(position) = &changes.position {
            self.position = position.clone();
        }
        if let Some(entry_date) = changes.entry_date {
            self.entry_date = entry_date;
        }
        if let Some(graduated_at) = changes.graduated_at {
            self.graduated_at = graduated_at;
        }
        if let Some(leave_at) = changes.leave_at {
            self.leave_at = leave_at;
        }
        if let Some(active_again_at) = changes.active_again_at {
            self.active_again_at = active_again_at;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }

        self
    }

    /// Trims text fields and checks the lifecycle rules.
    ///
    /// # Returns
    /// - `Ok(MemberFields)` - Normalized fields, a blank position becomes `None`
    /// - `Err(MemberError::Validation)` - The first rule that failed
    pub fn validate(mut self) -> Result<Self, MemberError> {
        self.member_code = self.member_code.trim().to_string();
        self.name = self.name.trim().to_string();
        self.position = self
            .position
            .map(|position| position.trim().to_string())
            .filter(|position| !position.is_empty());

        check_length("member_code", &self.member_code, MAX_MEMBER_CODE_LEN)?;
        check_length("name", &self.name, MAX_NAME_LEN)?;
        if let Some(position) = &self.position {
            check_length("position", position, MAX_POSITION_LEN)?;
        }

        if let Some(entry_date) = self.entry_date {
            for (field, date) in [
                ("graduated_at", self.graduated_at),
                ("leave_at", self.leave_at),
                ("active_again_at", self.active_again_at),
            ] {
                if date.is_some_and(|date| date < entry_date) {
                    return Err(MemberError::Validation(format!(
                        "{} must not be before entry_date",
                        field
                    )));
                }
            }
        }

        if let (Some(leave_at), Some(active_again_at)) = (self.leave_at, self.active_again_at) {
            if active_again_at < leave_at {
                return Err(MemberError::Validation(
                    "active_again_at must not be before leave_at".to_string(),
                ));
            }
        }

        match self.status {
            MemberStatus::Graduated if self.graduated_at.is_none() => {
                return Err(MemberError::Validation(
                    "graduated members require graduated_at".to_string(),
                ));
            }
            MemberStatus::Leave if self.leave_at.is_none() => {
                return Err(MemberError::Validation(
                    "members on leave require leave_at".to_string(),
                ));
            }
            _ => {}
        }

        Ok(self)
    }

    /// The scope and code identifying these fields among active members.
    pub fn natural_key(&self) -> NaturalKey {
        NaturalKey {
            organization_type: self.organization_type,
            affiliation_id: self.affiliation_id,
            member_code: self.member_code.clone(),
        }
    }

    /// Converts validated fields back into a create request for the repository.
    pub fn into_create_dto(self) -> CreateMemberDto {
        CreateMemberDto {
            organization_type: self.organization_type,
            affiliation_id: self.affiliation_id,
            member_code: self.member_code,
            name: self.name,
            position: self.position,
            entry_date: self.entry_date,
            graduated_at: self.graduated_at,
            leave_at: self.leave_at,
            active_again_at: self.active_again_at,
            status: self.status,
        }
    }

    /// Converts validated fields into an active model for an update.
    ///
    /// Only the columns present in `changes` are set; every other column stays `NotSet` so
    /// the write leaves it as stored.
    pub fn into_update_model(self, changes: &UpdateMemberDto) -> entity::member::ActiveModel {
        entity::member::ActiveModel {
            organization_type: set_if(changes.organization_type.is_some(), self.organization_type),
            affiliation_id: set_if(changes.affiliation_id.is_some(), self.affiliation_id),
            member_code: set_if(changes.member_code.is_some(), self.member_code),
            name: set_if(changes.name.is_some(), self.name),
            position: set_if(changes.position.is_some(), self.position),
            entry_date: set_if(changes.entry_date.is_some(), self.entry_date),
            graduated_at: set_if(changes.graduated_at.is_some(), self.graduated_at),
            leave_at: set_if(changes.leave_at.is_some(), self.leave_at),
            active_again_at: set_if(changes.active_again_at.is_some(), self.active_again_at),
            status: set_if(changes.status.is_some(), self.status),
            ..Default::default()
        }
    }
}

fn set_if<V>(present: bool, value: V) -> ActiveValue<V>
where
    V: Into<sea_orm::Value>,
{
    if present {
        ActiveValue::Set(value)
    } else {
        ActiveValue::NotSet
    }
}

fn check_length(field: &str, value: &str, max: usize) -> Result<(), MemberError> {
    if value.is_empty() {
        return Err(MemberError::Validation(format!(
            "{} must not be blank",
            field
        )));
    }
    if value.chars().count() > max {
        return Err(MemberError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }

    Ok(())
}
