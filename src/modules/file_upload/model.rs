/// New file metadata to insert into the database.
#[derive(Debug, Clone)]
pub struct NewFileRecord {
    pub kind: String,
    pub url: String,
}
