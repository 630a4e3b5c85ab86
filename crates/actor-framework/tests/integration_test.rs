use actor_framework::{ActorEntity, EntityStore, FrameworkError, ResourceActor, ResourceClient};
use async_trait::async_trait;

// --- Test Entities ---

#[derive(Clone, Debug, PartialEq)]
struct Folder {
    id: u32,
    name: String,
}

#[derive(Debug, thiserror::Error)]
#[error("folder error")]
struct FolderError;

#[async_trait]
impl ActorEntity for Folder {
    type Id = u32;
    type Create = Folder;
    type Update = String;
    type Query = ();
    type QueryResult = usize;
    type Context = ();
    type Error = FolderError;

    fn from_create_params(params: Folder) -> Result<Self, Self::Error> {
        Ok(params)
    }

    fn id(&self) -> &u32 {
        &self.id
    }

    async fn on_update(&mut self, name: String, _: &()) -> Result<(), Self::Error> {
        self.name = name;
        Ok(())
    }

    async fn handle_query(_: (), rows: &EntityStore<Self>, _: &()) -> Result<usize, Self::Error> {
        Ok(rows.len())
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Note {
    id: u32,
    folder_id: u32,
    text: String,
}

#[derive(Debug)]
enum NoteQuery {
    InFolder(u32),
}

#[derive(Debug, thiserror::Error)]
enum NoteError {
    #[error("note text must not be empty")]
    Empty,
    #[error("folder not found: {0}")]
    UnknownFolder(u32),
    #[error("text must not be empty")]
    EmptyEdit,
    #[error("folder store unavailable")]
    Unavailable,
}

#[async_trait]
impl ActorEntity for Note {
    type Id = u32;
    type Create = Note;
    type Update = String;
    type Query = NoteQuery;
    type QueryResult = Vec<Note>;
    type Context = ResourceClient<Folder>;
    type Error = NoteError;

    fn from_create_params(params: Note) -> Result<Self, Self::Error> {
        if params.text.is_empty() {
            return Err(NoteError::Empty);
        }
        Ok(params)
    }

    fn id(&self) -> &u32 {
        &self.id
    }

    async fn on_create(&mut self, folders: &ResourceClient<Folder>) -> Result<(), Self::Error> {
        match folders.get(self.folder_id).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(NoteError::UnknownFolder(self.folder_id)),
            Err(_) => Err(NoteError::Unavailable),
        }
    }

    async fn on_update(&mut self, text: String, _: &ResourceClient<Folder>) -> Result<(), Self::Error> {
        // Mutate first, then fail: the actor must discard the partially edited draft.
        self.text = text;
        if self.text.is_empty() {
            return Err(NoteError::EmptyEdit);
        }
        Ok(())
    }

    async fn handle_query(
        query: NoteQuery,
        rows: &EntityStore<Self>,
        _: &ResourceClient<Folder>,
    ) -> Result<Vec<Note>, Self::Error> {
        let NoteQuery::InFolder(folder_id) = query;
        Ok(rows.iter().filter(|n| n.folder_id == folder_id).cloned().collect())
    }
}

fn note(id: u32, folder_id: u32, text: &str) -> Note {
    Note {
        id,
        folder_id,
        text: text.to_string(),
    }
}

fn spawn_stores() -> (ResourceClient<Folder>, ResourceClient<Note>) {
    let (folder_actor, folders) = ResourceActor::<Folder>::new(10);
    let (note_actor, notes) = ResourceActor::<Note>::new(10);
    tokio::spawn(folder_actor.run(()));
    tokio::spawn(note_actor.run(folders.clone()));
    (folders, notes)
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (folders, notes) = spawn_stores();

    // 1. Create
    let inbox = folders
        .create(Folder {
            id: 1,
            name: "Inbox".into(),
        })
        .await
        .unwrap();
    assert_eq!(inbox.id, 1);

    notes.create(note(10, 1, "first")).await.unwrap();
    notes.create(note(11, 1, "second")).await.unwrap();

    // 2. Get
    let fetched = notes.get(10).await.unwrap().unwrap();
    assert_eq!(fetched.text, "first");
    assert!(notes.get(99).await.unwrap().is_none());

    // 3. Update
    let renamed = folders.update(1, "Archive".into()).await.unwrap();
    assert_eq!(renamed.name, "Archive");

    // 4. Query keeps creation order
    let in_folder = notes.query(NoteQuery::InFolder(1)).await.unwrap();
    let texts: Vec<_> = in_folder.iter().map(|n| n.text.as_str()).collect();
    assert_eq!(texts, vec!["first", "second"]);
    assert_eq!(folders.query(()).await.unwrap(), 1);
}

#[tokio::test]
async fn test_duplicate_key_is_rejected() {
    let (folders, _notes) = spawn_stores();
    folders
        .create(Folder {
            id: 1,
            name: "Inbox".into(),
        })
        .await
        .unwrap();

    let err = folders
        .create(Folder {
            id: 1,
            name: "Shadow".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::AlreadyExists(ref id) if id == "1"));
    assert_eq!(folders.get(1).await.unwrap().unwrap().name, "Inbox");
}

#[tokio::test]
async fn test_failed_hooks_leave_store_untouched() {
    let (folders, notes) = spawn_stores();
    folders
        .create(Folder {
            id: 1,
            name: "Inbox".into(),
        })
        .await
        .unwrap();

    // Rejected by from_create_params
    let err = notes.create(note(1, 1, "")).await.unwrap_err();
    assert!(matches!(
        err.into_entity_error::<NoteError>(),
        Ok(NoteError::Empty)
    ));

    // Rejected by on_create through the injected context
    let err = notes.create(note(2, 7, "orphan")).await.unwrap_err();
    assert!(matches!(
        err.into_entity_error::<NoteError>(),
        Ok(NoteError::UnknownFolder(7))
    ));

    assert!(notes.get(1).await.unwrap().is_none());
    assert!(notes.get(2).await.unwrap().is_none());
    assert!(notes.query(NoteQuery::InFolder(7)).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_update_keeps_previous_row() {
    let (folders, notes) = spawn_stores();
    folders
        .create(Folder {
            id: 1,
            name: "Inbox".into(),
        })
        .await
        .unwrap();
    notes.create(note(5, 1, "keep me")).await.unwrap();

    let err = notes.update(5, String::new()).await.unwrap_err();
    assert!(matches!(
        err.into_entity_error::<NoteError>(),
        Ok(NoteError::EmptyEdit)
    ));
    assert_eq!(notes.get(5).await.unwrap().unwrap().text, "keep me");

    let missing = notes.update(6, "new".into()).await.unwrap_err();
    assert!(matches!(missing, FrameworkError::NotFound(ref id) if id == "6"));
}

#[tokio::test]
async fn test_client_reports_closed_actor() {
    let (actor, client) = ResourceActor::<Folder>::new(1);
    drop(actor);

    let err = client.get(1).await.unwrap_err();
    assert!(matches!(err, FrameworkError::ActorClosed));
}
