//! Fixed document pieces: head boilerplate, header icons and the client runtime

/// Tailwind CDN script and its dark-mode configuration
pub const TAILWIND_HEAD: &str = r#"    <script src="https://cdn.tailwindcss.com"></script>
    <script>
        tailwind.config = {
            darkMode: 'class',
            theme: {
                extend: {}
            }
        }
    </script>
"#;

/// Forces form controls to follow the dark theme
pub const DARK_OVERRIDES: &str = r#"    <style>
        .dark input, .dark select {
            background-color: rgb(55 65 81) !important;
            color: white !important;
            border-color: rgb(75 85 99) !important;
        }
        .dark input::placeholder, .dark select::placeholder {
            color: rgb(156 163 175) !important;
        }
        .dark option {
            background-color: rgb(55 65 81) !important;
            color: white !important;
        }
    </style>
"#;

pub const BODY_OPEN: &str =
    "<body class=\"bg-gray-50 dark:bg-gray-900 min-h-screen transition-colors duration-200\">\n";

/// Theme toggle button with sun and moon icons
pub const THEME_TOGGLE: &str = r#"            <button id="theme-toggle" class="p-2 rounded-lg bg-gray-200 dark:bg-gray-700 hover:bg-gray-300 dark:hover:bg-gray-600 transition-colors duration-200">
                <svg id="sun-icon" class="w-5 h-5 text-gray-800 dark:text-gray-200 hidden" fill="currentColor" viewBox="0 0 20 20">
                    <path fill-rule="evenodd" d="M10 2a1 1 0 011 1v1a1 1 0 11-2 0V3a1 1 0 011-1zm4 8a4 4 0 11-8 0 4 4 0 018 0zm-.464 4.95l.707.707a1 1 0 001.414-1.414l-.707-.707a1 1 0 00-1.414 1.414zm2.12-10.607a1 1 0 010 1.414l-.706.707a1 1 0 11-1.414-1.414l.707-.707a1 1 0 011.414 0zM17 11a1 1 0 100-2h-1a1 1 0 100 2h1zm-7 4a1 1 0 011 1v1a1 1 0 11-2 0v-1a1 1 0 011-1zM5.05 6.464A1 1 0 106.465 5.05l-.708-.707a1 1 0 00-1.414 1.414l.707.707zm1.414 8.486l-.707.707a1 1 0 01-1.414-1.414l.707-.707a1 1 0 011.414 1.414zM4 11a1 1 0 100-2H3a1 1 0 000 2h1z" clip-rule="evenodd"></path>
                </svg>
                <svg id="moon-icon" class="w-5 h-5 text-gray-800 dark:text-gray-200" fill="currentColor" viewBox="0 0 20 20">
                    <path d="M17.293 13.293A8 8 0 016.707 2.707a8.001 8.001 0 1010.586 10.586z"></path>
                </svg>
            </button>
"#;

/// Theme init/toggle logic; follows the `defaultTheme` constant emitted before it
pub const THEME_SCRIPT: &str = r#"        let currentTheme = localStorage.getItem('theme') || defaultTheme;

        function initTheme() {
            if (currentTheme === 'dark' || (currentTheme === 'auto' && window.matchMedia('(prefers-color-scheme: dark)').matches)) {
                document.documentElement.classList.add('dark');
                updateThemeIcon(true);
            } else {
                document.documentElement.classList.remove('dark');
                updateThemeIcon(false);
            }
        }

        function toggleTheme() {
            const isDark = document.documentElement.classList.contains('dark');
            if (isDark) {
                document.documentElement.classList.remove('dark');
                localStorage.setItem('theme', 'light');
                currentTheme = 'light';
                updateThemeIcon(false);
            } else {
                document.documentElement.classList.add('dark');
                localStorage.setItem('theme', 'dark');
                currentTheme = 'dark';
                updateThemeIcon(true);
            }
        }

        function updateThemeIcon(isDark) {
            const sunIcon = document.getElementById('sun-icon');
            const moonIcon = document.getElementById('moon-icon');
            if (isDark) {
                sunIcon.classList.remove('hidden');
                moonIcon.classList.add('hidden');
            } else {
                sunIcon.classList.add('hidden');
                moonIcon.classList.remove('hidden');
            }
        }

        if (currentTheme === 'auto') {
            window.matchMedia('(prefers-color-scheme: dark)').addEventListener('change', function(e) {
                if (currentTheme === 'auto') {
                    if (e.matches) {
                        document.documentElement.classList.add('dark');
                        updateThemeIcon(true);
                    } else {
                        document.documentElement.classList.remove('dark');
                        updateThemeIcon(false);
                    }
                }
            });
        }

"#;

/// Hydration and update helpers; follows the `components` constant
pub const CLIENT_RUNTIME: &str = r#"        function renderComponents() {
            components.forEach(component => {
                const element = document.getElementById(component.id);
                if (element) {
                    updateComponent(element, component);
                }
            });
        }

        function updateComponent(element, component) {
            if (component.className) {
                element.className = component.className;
            }
            if (component.style) {
                element.style = component.style;
            }
            if (component.visible !== undefined) {
                element.style.display = component.visible ? '' : 'none';
            }
        }

        function sendUpdate(componentId, data) {
            fetch('/update', {
                method: 'POST',
                headers: {
                    'Content-Type': 'application/json',
                },
                body: JSON.stringify({
                    componentId: componentId,
                    data: data
                })
            })
            .then(response => response.json())
            .then(data => {
                if (data.components) {
                    data.components.forEach(comp => {
                        const element = document.getElementById(comp.id);
                        if (element) {
                            updateComponent(element, comp);
                        }
                    });
                }
            })
            .catch(error => console.error('Error:', error));
        }

"#;

pub const BOOTSTRAP: &str = r#"        document.addEventListener('DOMContentLoaded', function() {
            initTheme();
            renderComponents();
            document.getElementById('theme-toggle').addEventListener('click', toggleTheme);
        });
"#;
