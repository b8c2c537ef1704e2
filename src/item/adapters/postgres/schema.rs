//! Diesel schema for item catalogue persistence.

diesel::table! {
    /// Item records.
    items (id) {
        /// Item identifier.
        id -> Int4,
        /// Display name.
        #[max_length = 200]
        title -> Varchar,
        /// Rarity value.
        rarity -> Int2,
        /// Damage classification, null when unclassified.
        #[max_length = 20]
        damage_type -> Nullable<Varchar>,
        /// Icon image reference.
        icon_url -> Text,
    }
}

diesel::table! {
    /// Display properties attached to items.
    item_properties (id) {
        /// Row identifier.
        id -> Int4,
        /// Owning item.
        item_id -> Int4,
        /// Display position within the item.
        position -> Int4,
        /// Property name.
        #[max_length = 100]
        name -> Varchar,
        /// Property value.
        value -> Text,
    }
}

diesel::table! {
    /// Skills attached to items.
    item_skills (id) {
        /// Row identifier.
        id -> Int4,
        /// Owning item.
        item_id -> Int4,
        /// Display position within the item.
        position -> Int4,
        /// Skill title.
        #[max_length = 200]
        title -> Varchar,
        /// Skill description.
        description -> Text,
        /// Damage classification, null when unclassified.
        #[max_length = 20]
        damage_type -> Nullable<Varchar>,
    }
}

diesel::joinable!(item_properties -> items (item_id));
diesel::joinable!(item_skills -> items (item_id));
diesel::allow_tables_to_appear_in_same_query!(items, item_properties, item_skills);
