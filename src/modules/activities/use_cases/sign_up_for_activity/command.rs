// Intent to add an email to one activity's roster. Transport agnostic: the
// HTTP and GraphQL adapters both build it from already decoded input.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpForActivity {
    pub activity_name: String,
    pub email: String,
}
