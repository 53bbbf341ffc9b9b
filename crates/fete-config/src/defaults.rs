//! The hard-coded default document, returned whenever the stored config is
//! missing or unreadable. Placeholder content; admins replace it through
//! the editor on first use.

use crate::model::{
  Couple, EditableWeddingConfig, LocalizedPerson, LocationDetails,
  LocationOverride, PersonDetails, PersonOverride, VenueConfig, WeddingDate,
};

impl Default for EditableWeddingConfig {
  fn default() -> Self {
    EditableWeddingConfig {
      couple:    Couple {
        bride: LocalizedPerson {
          base: PersonDetails {
            first_name: "Hermione".into(),
            last_name:  "Granger".into(),
            full_name:  "Hermione Granger".into(),
            phone:      "+1 555 123 4567".into(),
          },
          en:   None,
          pl:   Some(PersonOverride {
            first_name: Some("Hermiona".into()),
            ..PersonOverride::default()
          }),
          uk:   Some(PersonOverride {
            first_name: Some("Герміона".into()),
            last_name:  Some("Ґрейнджер".into()),
            full_name:  Some("Герміона Ґрейнджер".into()),
            phone:      None,
          }),
        },
        groom: LocalizedPerson {
          base: PersonDetails {
            first_name: "Shrek".into(),
            last_name:  "Ogre".into(),
            full_name:  "Shrek Ogre".into(),
            phone:      "+1 555 765 4321".into(),
          },
          en:   None,
          pl:   Some(PersonOverride {
            last_name: Some("Ogr".into()),
            full_name: Some("Shrek Ogr".into()),
            ..PersonOverride::default()
          }),
          uk:   Some(PersonOverride {
            first_name: Some("Шрек".into()),
            last_name:  Some("Огр".into()),
            full_name:  Some("Шрек Огр".into()),
            phone:      None,
          }),
        },
      },
      ceremony:  VenueConfig {
        time:            Some("15:00".into()),
        google_maps_url: "https://maps.google.com/?q=Enchanted+Forest+Chapel"
          .into(),
        base:            LocationDetails {
          location_name: "Enchanted Forest Chapel".into(),
          address:       "123 Forest Lane, Fairytale Kingdom".into(),
        },
        en:              None,
        pl:              Some(LocationOverride {
          location_name: Some("Kaplica w Zaczarowanym Lesie".into()),
          address:       Some("Leśna 123, Baśniowe Królestwo".into()),
        }),
        uk:              Some(LocationOverride {
          location_name: Some("Каплиця Зачарованого Лісу".into()),
          address:       Some("Лісова 123, Казкове Королівство".into()),
        }),
      },
      reception: VenueConfig {
        time:            None,
        google_maps_url: "https://maps.google.com/?q=Dragon's+Keep+Ballroom"
          .into(),
        base:            LocationDetails {
          location_name: "Dragon's Keep Ballroom".into(),
          address:       "456 Swamp Road, Far Far Away".into(),
        },
        en:              None,
        pl:              Some(LocationOverride {
          location_name: Some("Sala Balowa Smoczej Twierdzy".into()),
          address:       Some("Bagnista 456, Bardzo Bardzo Daleko".into()),
        }),
        uk:              Some(LocationOverride {
          location_name: Some("Бальна Зала Драконячої Фортеці".into()),
          address:       Some("Болотна 456, Дуже Дуже Далеко".into()),
        }),
      },
      date:      WeddingDate { year: 2026, month: 12, day: 25 },
      dress_code:          None,
      group_qr_code:       None,
      background_image:    None,
      background_position: None,
    }
  }
}
