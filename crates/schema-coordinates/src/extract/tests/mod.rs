
use crate::schema::ParsedSchema;

/// A small menagerie exercising objects, interfaces, unions, enums, input
/// objects, and type extensions.
pub(crate) const PETS_SCHEMA: &str = r#"
schema {
  query: Root
  mutation: Mutation
}

interface Animal {
  name: String
}

type Dog implements Animal {
  name: String
  breed: String
}

type Cat implements Animal {
  name: String
  favoriteMilkBrand: MilkBrand
}

type Parrot implements Animal {
  name: String
  wingSpan: Int
}

union Pet = Dog | Cat | Parrot

type Human {
  name: String
  contactDetails: ContactDetails
}

type ContactDetails {
  email: String
}

extend type ContactDetails {
  address: Address
}

type Address {
  zip: String
}

type Root {
  animalOwner: Human
  allSpecies: [Animal!]!
  pets: [Pet]
}

type Mutation {
  addCat(name: String): Cat
  addVet(details: VetDetailsInput): Boolean
}

input VetDetailsInput {
  name: String
  clinic: String
}

enum MilkBrand {
  WHISKER_GOLD
  MEADOW
}
"#;

pub(crate) fn pets_schema() -> ParsedSchema {
    ParsedSchema::new(PETS_SCHEMA).expect("pets schema should build")
}

/// Extracts and sorts, since production order is not part of the contract.
pub(crate) fn extract_sorted(schema: &ParsedSchema, document: &str) -> Vec<String> {
    let mut coordinates: Vec<String> = schema
        .extract_schema_coordinates(document)
        .expect("extraction should succeed")
        .into_iter()
        .collect();
    coordinates.sort();
    coordinates
}
