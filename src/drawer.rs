use std::collections::HashMap;

/// Side panels a user can open next to the chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawerKind {
    Info,
    Menu,
}

impl DrawerKind {
    pub const ALL: [DrawerKind; 2] = [DrawerKind::Info, DrawerKind::Menu];

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "info" => Some(Self::Info),
            "menu" => Some(Self::Menu),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Menu => "menu",
        }
    }

    /// Panel body shown when the drawer opens.
    pub fn content(self) -> &'static str {
        match self {
            Self::Info => {
                "**LegalBot Panamá**\n\
                 Respuestas breves sobre los códigos de Panamá con la cita legal correspondiente.\n\
                 - Códigos cargados: Trabajo, Familia, Penal y Civil.\n\
                 - Modo estricto: la respuesta se limita al fragmento recuperado.\n\
                 - Citas: muestra código, artículo y documento de origen.\n\
                 Si el backend no responde, se usa una respuesta simulada basada en palabras clave."
            }
            Self::Menu => {
                "**Menú**\n\
                 - `/legal ask` hace una consulta (opciones `strict` y `citations`).\n\
                 - `/legal reset` reinicia la conversación.\n\
                 - `/legal panel` abre el panel `info` o `menu`.\n\
                 - `/legal close` cierra los paneles abiertos.\n\
                 - `/legal status` muestra a qué backend se envían las preguntas."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawerState {
    Open,
    #[default]
    Closed,
}

/// Open/closed state of each drawer for one user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawerController {
    info: DrawerState,
    menu: DrawerState,
}

impl DrawerController {
    pub fn state(&self, kind: DrawerKind) -> DrawerState {
        match kind {
            DrawerKind::Info => self.info,
            DrawerKind::Menu => self.menu,
        }
    }

    /// Opening one drawer leaves the other as it was.
    pub fn open(&mut self, kind: DrawerKind) {
        match kind {
            DrawerKind::Info => self.info = DrawerState::Open,
            DrawerKind::Menu => self.menu = DrawerState::Open,
        }
    }

    pub fn close_all(&mut self) {
        self.info = DrawerState::Closed;
        self.menu = DrawerState::Closed;
    }

    pub fn overlay_visible(&self) -> bool {
        self.open_drawers().next().is_some()
    }

    pub fn open_drawers(&self) -> impl Iterator<Item = DrawerKind> + '_ {
        DrawerKind::ALL
            .into_iter()
            .filter(|kind| self.state(*kind) == DrawerState::Open)
    }
}

/// Drawer controllers for every user with at least one drawer open.
#[derive(Debug, Default)]
pub struct DrawerBoard {
    users: HashMap<u64, DrawerController>,
}

impl DrawerBoard {
    /// Unknown names leave the board untouched.
    pub fn open(&mut self, user_id: u64, name: &str) -> Option<DrawerKind> {
        let kind = DrawerKind::parse(name)?;
        self.users.entry(user_id).or_default().open(kind);
        Some(kind)
    }

    /// Close the user's drawers and forget them. Returns what was open.
    pub fn close(&mut self, user_id: u64) -> Vec<DrawerKind> {
        let Some(controller) = self.users.get_mut(&user_id) else {
            return Vec::new();
        };
        let open: Vec<DrawerKind> = controller.open_drawers().collect();
        controller.close_all();
        if !controller.overlay_visible() {
            self.users.remove(&user_id);
        }
        open
    }

    /// Number of users with drawer state held.
    pub fn tracked_users(&self) -> usize {
        self.users.len()
    }
}
