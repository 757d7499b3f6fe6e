/// Request path prefixes. Each is followed by one path segment, except
/// [`GET_ALL_DRUG`](endpoints::GET_ALL_DRUG) which takes none.
pub mod endpoints {
    pub const GET_ALL_DRUG: &str = "/get_all_drug/";
    pub const GET_DRUG: &str = "/get_drug/";
    pub const ADD_DRUG: &str = "/add_drug/";
    pub const CHANGE_HOLDER: &str = "/change_holder/";
}
