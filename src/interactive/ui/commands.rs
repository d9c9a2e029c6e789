use crate::interactive::domain::models::SearchRequest;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    ScheduleSearch(u64), // delay in milliseconds
    ExecuteSearch(SearchRequest),
    Quit,
}
