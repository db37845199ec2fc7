//! JSON serializers for directors and films.
//!
//! Input serializers hold each field as raw JSON so that missing, wrongly
//! typed or malformed fields all become per-field messages instead of a
//! blanket deserialization failure. Validation runs in two passes: presence
//! rules on the raw payload, then content rules on the values read out of
//! it. Output representations project a row onto the public fields only.

use films_core::error::CoreError;
use films_core::naming::title_case;
use films_core::types::{Date, DbId};
use films_core::validation::{
    as_integer, date_field, integer_field, json_type_name, string_field, FieldErrors,
    BLANK_MESSAGE, INTEGER_TYPE_MESSAGE,
};
use films_db::models::director::{CreateDirector, Director};
use films_db::models::film::{CreateFilm, Film};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Column width of `directors.name`, in chars.
const DIRECTOR_NAME_MAX_CHARS: usize = 50;

// ---------------------------------------------------------------------------
// Director
// ---------------------------------------------------------------------------

/// Director payload accepted by `POST /directors`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct DirectorSerializer {
    #[validate(required(message = "This field is required."))]
    pub name: Option<Value>,
    #[validate(required(message = "This field is required."))]
    pub birthday: Option<Value>,
}

#[derive(Debug, Validate)]
struct DirectorFields {
    #[validate(length(max = 50, message = "Ensure this field has no more than 50 characters."))]
    name: Option<String>,
}

impl DirectorSerializer {
    /// Validate every field and build the insert DTO.
    ///
    /// Leading and trailing whitespace is stripped from the name before the
    /// length and blank checks. The length is checked again on the
    /// title-cased form, which is what the repository stores.
    pub fn into_create(self) -> Result<CreateDirector, CoreError> {
        let mut errors = FieldErrors::new();
        if let Err(e) = self.validate() {
            errors.extend_from(&e);
        }

        let fields = DirectorFields {
            name: string_field("name", self.name.as_ref(), &mut errors)
                .map(|n| n.trim().to_string()),
        };
        if let Err(e) = fields.validate() {
            errors.extend_from(&e);
        }
        if let Some(name) = fields.name.as_deref() {
            if name.is_empty() {
                errors.add("name", BLANK_MESSAGE);
            } else if errors.get("name").is_none()
                && title_case(name).chars().count() > DIRECTOR_NAME_MAX_CHARS
            {
                errors.add("name", "Ensure this field has no more than 50 characters.");
            }
        }
        let birthday = date_field("birthday", self.birthday.as_ref(), &mut errors);
        errors.into_result()?;

        match (fields.name, birthday) {
            (Some(name), Some(birthday)) => Ok(CreateDirector { name, birthday }),
            _ => Err(CoreError::Internal(
                "validated director payload is missing fields".into(),
            )),
        }
    }
}

/// Public representation of a director: `{name, birthday}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectorRepr {
    pub name: String,
    pub birthday: Date,
}

impl From<Director> for DirectorRepr {
    fn from(director: Director) -> Self {
        Self {
            name: director.name,
            birthday: director.birthday,
        }
    }
}

// ---------------------------------------------------------------------------
// Film
// ---------------------------------------------------------------------------

/// Film payload accepted by `POST /films`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct FilmSerializer {
    #[validate(required(message = "This field is required."))]
    pub title: Option<Value>,
    #[validate(required(message = "This field is required."))]
    pub release: Option<Value>,
    #[validate(required(message = "This field is required."))]
    pub runtime: Option<Value>,
    #[validate(required(message = "This field is required."))]
    pub director: Option<Value>,
}

#[derive(Debug, Validate)]
struct FilmFields {
    #[validate(length(max = 120, message = "Ensure this field has no more than 120 characters."))]
    title: Option<String>,
}

impl FilmSerializer {
    /// The director id the payload refers to, when it is readable as one.
    /// Handlers use it to look the director up before calling
    /// [`FilmSerializer::into_create`].
    pub fn director_id(&self) -> Option<DbId> {
        self.director.as_ref().and_then(as_integer)
    }

    /// Validate every field and build the insert DTO.
    ///
    /// `director_exists` is the caller's lookup result for
    /// [`FilmSerializer::director_id`]; an unknown director is reported
    /// against the `director` field.
    pub fn into_create(self, director_exists: bool) -> Result<CreateFilm, CoreError> {
        let mut errors = FieldErrors::new();
        if let Err(e) = self.validate() {
            errors.extend_from(&e);
        }

        let fields = FilmFields {
            title: string_field("title", self.title.as_ref(), &mut errors)
                .map(|t| t.trim().to_string()),
        };
        if let Err(e) = fields.validate() {
            errors.extend_from(&e);
        }
        if fields.title.as_deref() == Some("") {
            errors.add("title", BLANK_MESSAGE);
        }

        let release = date_field("release", self.release.as_ref(), &mut errors);
        let runtime = integer_field("runtime", self.runtime.as_ref(), INTEGER_TYPE_MESSAGE, &mut errors)
            .and_then(|minutes| match i32::try_from(minutes) {
                Ok(minutes) => Some(minutes),
                Err(_) => {
                    let bound = if minutes > 0 {
                        format!("less than or equal to {}", i32::MAX)
                    } else {
                        format!("greater than or equal to {}", i32::MIN)
                    };
                    errors.add("runtime", format!("Ensure this value is {bound}."));
                    None
                }
            });

        let director_id = self.director_id();
        match (&self.director, director_id) {
            (Some(raw), None) => errors.add(
                "director",
                format!(
                    "Incorrect type. Expected pk value, received {}.",
                    json_type_name(raw)
                ),
            ),
            (Some(_), Some(id)) if !director_exists => errors.add(
                "director",
                format!("Invalid pk \"{id}\" - object does not exist."),
            ),
            _ => {}
        }
        errors.into_result()?;

        match (fields.title, release, runtime, director_id) {
            (Some(title), Some(release), Some(runtime), Some(director_id)) => Ok(CreateFilm {
                title,
                release,
                runtime,
                director_id,
            }),
            _ => Err(CoreError::Internal(
                "validated film payload is missing fields".into(),
            )),
        }
    }
}

/// Public representation of a film; `director` is the director's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilmRepr {
    pub title: String,
    pub release: Date,
    pub runtime: i32,
    pub director: DbId,
}

impl From<Film> for FilmRepr {
    fn from(film: Film) -> Self {
        Self {
            title: film.title,
            release: film.release,
            runtime: film.runtime,
            director: film.director_id,
        }
    }
}
