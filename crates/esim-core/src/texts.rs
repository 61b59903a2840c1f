//! User-facing strings sent by the bot.
//!
//! All message bodies live here so they stay in one place and are easy to
//! update. Bodies marked HTML use the Telegram HTML subset.

/// Purchase and catalogue link used by every "buy" style button.
pub const PURCHASE_URL: &str = "https://travelconnect.online/?p=312";

/// HTML.
pub const ABOUT: &str = "📱 <b>Что такое eSIM?</b>

eSIM — это встроенная сим-карта, которая:
• Не требует физической карты
• Активируется через QR-код
• Сохраняет Ваш основной номер
• Экономит место в устройстве
• Идеальна для путешественников
• Использование eSIM от TravelConnect <b>Выгоднее до 10 раз</b> по сравнению с местными операторами

Поддержка eSIM есть в:
• iPhone X и новее
• Google Pixel 3 и новее
• Samsung Galaxy А56 и новее
• И других современных устройствах";

/// HTML.
pub const COVERAGE: &str = "🌍 <b>Глобальное покрытие</b>

Наша eSIM работает в 200+ странах мира!
Ниже перечислены цены на основные направления:

• Турция — от 145₽ за 1 ГБ
• Египет — от 347₽ за 1 ГБ
• Таиланд — от 120₽ за 1 ГБ
• ОАЭ — от 285₽ за 1 ГБ
• Китай — от 120₽ за 1 ГБ
• Вьетнам — от 158₽ за 1 ГБ
• Мальдивы — от 440₽ за 1 ГБ
• Индия — от 453₽ за 1 ГБ
• Шри-Ланка — от 240₽ за 1 ГБ
• Грузия — от 249₽ за 1 ГБ
• Армения — от 184₽ за 1 ГБ";

pub const COVERAGE_BUTTON: &str = "🌐 Все страны и тарифы ЗДЕСЬ!!!";

/// HTML.
pub const TARIFFS_PROMPT: &str = "💳 <b>Выберите регион для просмотра тарифов:</b>";

/// HTML.
pub const BUY: &str = "🛒 <b>Как приобрести eSIM:</b>

1. Выберите тариф на нашем сайте
2. Пройдите простую процедуру регистрации
3. Оплатите любым удобным для Вас способом
4. Получите QR-код
5. Отсканируйте QR-код или установите eSIM вручную по инструкции
6. По прибытии в выбранную страну eSIM активируется автоматически
7. Купили один раз!!!! Используете установленную eSIM просто меняя тариф

💡 <i>Активация занимает менее 5 минут</i>";

pub const BUY_ORDER_BUTTON: &str = "🛒 Оформить заказ";
pub const BUY_TARIFFS_BUTTON: &str = "🌍 Посмотреть тарифы";
pub const HELP_BUTTON: &str = "❓ Помощь";
pub const PURCHASE_BUTTON: &str = "🛒 Купить";

/// HTML.
pub const HELP: &str = "❓ <b>Частые вопросы:</b>

<b>Вопрос:</b> Как проверить поддержку eSIM?
<b>Ответ:</b> Проверьте настройки телефона: Настройки → Сотовая связь → Добавить тариф/добавить eSIM

<b>Вопрос:</b> Можно ли использовать два номера одновременно?
<b>Ответ:</b> Да, если устройство поддерживает Dual SIM с eSIM

<b>Вопрос:</b> Сколько времени занимает активация?
<b>Ответ:</b> Обычно менее 5 минут после сканирования QR-кода

<b>Вопрос:</b> Как установить eSIM?
<b>Ответ:</b> Используйте кнопку меню: ⚙️ Инструкция

<b>Вопрос:</b> Как пополнить eSIM?
<b>Ответ:</b> Зайти на сайт под своей учетной записью, выбрать страну и интересующий пакет интернета, произвести оплату

• 📱 О eSIM - узнайте о технологии
• 🌍 Покрытие - страны и цены
• 💳 Тарифы - подробные тарифы по регионам
• 🛒 Купить - инструкция по покупке
• 📞 Контакты - свяжитесь с нами
• ⚙️ Инструкция - как использовать eSIM";

/// HTML. The zero-width spaces keep Telegram from auto-linking the bare domain.
pub const CONTACTS: &str = "📞 <b>Контакты</b>

• Сайт: http:&#8203;//travelconnect&#8203;.online

• Станьте клиентом после быстрой регистрации — и получите
<b>персональную поддержку 24/7.</b>

⏰ <i><b>Забота о вас — наш приоритет</b></i>";

pub const CONTACTS_BUTTON: &str = "🌐 Перейти на сайт: travelconnect.online";

/// HTML.
pub const INSTRUCTIONS: &str = "⚙️ <b>Инструкция</b>

• <b>Удостоверьтись, что Ваше устройство поддерживает eSIM:</b>

•Наберите на своем телефоне (в режиме набора номера) команду: <b>*#06#</b>

•Устройство поддерживает eSIM если появиться номер <b>EID</b>

• Какие 2 простых действия необходимо сделать, чтобы сим карта предоставила доступ к интернету в роуминге:

• <b>iPhone (Apple)</b>

1. Включите роуминг на добавленной eSIM:
    Откройте меню Настройки: → Сотовая связь → нажмите на добавленную eSIM → Роуминг данных и включите его

2. Установите данную eSIM в качестве используемой для сотовых данных:
    Откройте меню Настройки: → Сотовая связь → Сотовые данные и поставьте отметку напротив установленной eSIM

• <b>Android/Samsung</b>

1. Включите роуминг на добавленной eSIM:
    Откройте меню Настройки: →Подключения →Мобильные сети → Роуминг данных и включите его на нашей eSIM

2. Установите данную eSIM в качестве используемой для сотовых данных:
    Откройте меню Настройки: →Подключения →Диспетчер SIM карт →Мобильные данные и выберите добавленную eSIM в качестве используемой для мобильных данных";

pub const GUIDANCE: &str = "Пожалуйста, используйте меню для навигации. \
Если у вас есть вопросы, нажмите '❓ Помощь'";

pub const STATUS_OK: &str = "✅ Бот работает нормально";

pub const UNKNOWN_COMMAND: &str = "Неизвестная команда. Используйте /start для отображения меню \
или /help для получения справки.";

pub const TARIFF_NOT_FOUND: &str = "Тариф не найден. Пожалуйста, выберите снова.";

pub const CALLBACK_NOT_RECOGNIZED: &str = "Команда не распознана. Пожалуйста, выберите снова.";

pub const HANDLER_FAULT: &str = "⚠️ Произошла ошибка. Пожалуйста, попробуйте позже.";

pub const UNEXPECTED_FAULT: &str =
    "Произошла непредвиденная ошибка. Пожалуйста, попробуйте еще раз.";

/// HTML greeting for `/start`. `mention` must already be HTML-safe.
pub fn start_greeting(mention: &str) -> String {
    format!(
        "Привет, {mention}!\n\n\
        Я бот-помощник по eSIM — современной цифровой сим-карте.\n\n\
        Данная сим-карта устанавливается один раз и может использоваться в разных поездках по всему миру!!!\n\n\
        Выберите раздел в меню ниже:"
    )
}

/// HTML body for a region's price list.
pub fn region_tariffs(name: &str, prices: &str) -> String {
    format!("🌍 <b>Тарифы для {name}:</b>\n\n{prices}")
}
