use crate::properties::{
    ActivityProperties, ObjectProperties, QuestionProperties, TransitiveProperties,
};

node! {
    /// A transitive activity: `Create`, `Follow`, `Like`, and so on.
    pub struct Activity {
        properties: ObjectProperties,
        activity: ActivityProperties,
        transitive: TransitiveProperties,
    }
}

node! {
    /// An activity without a direct object: `Arrive`, `Travel`.
    pub struct IntransitiveActivity {
        properties: ObjectProperties,
        activity: ActivityProperties,
    }
}

node! {
    pub struct Question {
        properties: ObjectProperties,
        activity: ActivityProperties,
        question: QuestionProperties,
    }
}
